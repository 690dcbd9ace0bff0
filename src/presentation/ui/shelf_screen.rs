//! Book shelf screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Tabs, Widget},
};

use crate::domain::entities::{Book, BookId, BorrowedBook, Page};
use crate::domain::ports::ListParams;

/// Shelf tab selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfTab {
    /// Books owned by the current user.
    MyBooks,
    /// All displayable books in the network.
    AllBooks,
    /// Books the current user has borrowed.
    Borrowed,
    /// Owned books other members have returned.
    Returned,
}

impl ShelfTab {
    const ALL: [Self; 4] = [Self::MyBooks, Self::AllBooks, Self::Borrowed, Self::Returned];

    const fn title(self) -> &'static str {
        match self {
            Self::MyBooks => "My Books",
            Self::AllBooks => "All Books",
            Self::Borrowed => "Borrowed",
            Self::Returned => "Returned",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::MyBooks => 0,
            Self::AllBooks => 1,
            Self::Borrowed => 2,
            Self::Returned => 3,
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::MyBooks => Self::AllBooks,
            Self::AllBooks => Self::Borrowed,
            Self::Borrowed => Self::Returned,
            Self::Returned => Self::MyBooks,
        }
    }
}

/// Action requested by the shelf screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShelfAction {
    None,
    /// Fetch a page for the given tab.
    Load(ShelfTab, ListParams),
    /// Borrow the selected book.
    Borrow(BookId),
    /// Return the selected borrowed book.
    Return(BookId),
    /// Approve the return of one of the owner's books.
    ApproveReturn(BookId),
    /// Flip the shareable flag on the selected owned book.
    ToggleShareable(BookId),
    /// Flip the archived flag on the selected owned book.
    ToggleArchived(BookId),
    /// Drop the session and go back to login.
    Logout,
    Quit,
}

/// Book shelf screen state.
pub struct ShelfScreenState {
    tab: ShelfTab,
    my_books: Page<Book>,
    all_books: Page<Book>,
    borrowed: Page<BorrowedBook>,
    returned: Page<BorrowedBook>,
    selected: usize,
    loading: bool,
    status: Option<(String, bool)>,
    page_size: u32,
}

impl ShelfScreenState {
    /// Creates empty shelf state with the given listing page size.
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            tab: ShelfTab::MyBooks,
            my_books: Page::empty(),
            all_books: Page::empty(),
            borrowed: Page::empty(),
            returned: Page::empty(),
            selected: 0,
            loading: false,
            status: None,
            page_size,
        }
    }

    /// Returns the active tab.
    #[must_use]
    pub const fn tab(&self) -> ShelfTab {
        self.tab
    }

    /// Returns the params for the first page of a tab.
    #[must_use]
    pub const fn first_page_params(&self) -> ListParams {
        ListParams {
            page: Some(0),
            size: Some(self.page_size),
        }
    }

    /// Returns the params for the page currently shown on the active tab.
    #[must_use]
    pub fn current_page_params(&self) -> ListParams {
        let (number, _, _, _) = self.current_meta();
        ListParams {
            page: Some(number),
            size: Some(self.page_size),
        }
    }

    /// Returns the current status message, if any.
    #[must_use]
    pub fn status(&self) -> Option<(&str, bool)> {
        self.status
            .as_ref()
            .map(|(message, is_error)| (message.as_str(), *is_error))
    }

    /// Marks a fetch as in flight.
    pub fn set_loading(&mut self) {
        self.loading = true;
        self.status = None;
    }

    /// Applies a fetched page of books to a tab.
    pub fn apply_books(&mut self, tab: ShelfTab, page: Page<Book>) {
        match tab {
            ShelfTab::MyBooks => self.my_books = page,
            ShelfTab::AllBooks => self.all_books = page,
            ShelfTab::Borrowed | ShelfTab::Returned => {}
        }
        self.loading = false;
        self.selected = 0;
    }

    /// Applies a fetched page of loans to the borrowed or returned tab.
    pub fn apply_loans(&mut self, tab: ShelfTab, page: Page<BorrowedBook>) {
        match tab {
            ShelfTab::Borrowed => self.borrowed = page,
            ShelfTab::Returned => self.returned = page,
            ShelfTab::MyBooks | ShelfTab::AllBooks => {}
        }
        self.loading = false;
        self.selected = 0;
    }

    /// Shows a status message.
    pub fn set_status(&mut self, message: impl Into<String>, is_error: bool) {
        self.loading = false;
        self.status = Some((message.into(), is_error));
    }

    fn current_len(&self) -> usize {
        match self.tab {
            ShelfTab::MyBooks => self.my_books.content.len(),
            ShelfTab::AllBooks => self.all_books.content.len(),
            ShelfTab::Borrowed => self.borrowed.content.len(),
            ShelfTab::Returned => self.returned.content.len(),
        }
    }

    fn current_meta(&self) -> (u32, u32, Option<u32>, Option<u32>) {
        let (number, total_pages, next, previous) = match self.tab {
            ShelfTab::MyBooks => (
                self.my_books.number,
                self.my_books.total_pages,
                self.my_books.next_page(),
                self.my_books.previous_page(),
            ),
            ShelfTab::AllBooks => (
                self.all_books.number,
                self.all_books.total_pages,
                self.all_books.next_page(),
                self.all_books.previous_page(),
            ),
            ShelfTab::Borrowed => (
                self.borrowed.number,
                self.borrowed.total_pages,
                self.borrowed.next_page(),
                self.borrowed.previous_page(),
            ),
            ShelfTab::Returned => (
                self.returned.number,
                self.returned.total_pages,
                self.returned.next_page(),
                self.returned.previous_page(),
            ),
        };
        (number, total_pages, next, previous)
    }

    fn load_page(&self, page: u32) -> ShelfAction {
        ShelfAction::Load(
            self.tab,
            ListParams::page(page).with_size(self.page_size),
        )
    }

    fn switch_tab(&mut self, tab: ShelfTab) -> ShelfAction {
        self.tab = tab;
        self.selected = 0;
        ShelfAction::Load(tab, self.first_page_params())
    }

    fn selected_book(&self) -> Option<&Book> {
        match self.tab {
            ShelfTab::MyBooks => self.my_books.content.get(self.selected),
            ShelfTab::AllBooks => self.all_books.content.get(self.selected),
            ShelfTab::Borrowed | ShelfTab::Returned => None,
        }
    }

    fn selected_loan(&self) -> Option<&BorrowedBook> {
        match self.tab {
            ShelfTab::Borrowed => self.borrowed.content.get(self.selected),
            ShelfTab::Returned => self.returned.content.get(self.selected),
            ShelfTab::MyBooks | ShelfTab::AllBooks => None,
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> ShelfAction {
        if self.loading {
            return ShelfAction::None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return ShelfAction::Quit,
            KeyCode::Char('l') => return ShelfAction::Logout,
            KeyCode::Tab => return self.switch_tab(self.tab.next()),
            KeyCode::Char('1') => return self.switch_tab(ShelfTab::MyBooks),
            KeyCode::Char('2') => return self.switch_tab(ShelfTab::AllBooks),
            KeyCode::Char('3') => return self.switch_tab(ShelfTab::Borrowed),
            KeyCode::Char('4') => return self.switch_tab(ShelfTab::Returned),
            KeyCode::Char('n') | KeyCode::Right => {
                if let (_, _, Some(next), _) = self.current_meta() {
                    return self.load_page(next);
                }
            }
            KeyCode::Char('p') | KeyCode::Left => {
                if let (_, _, _, Some(previous)) = self.current_meta() {
                    return self.load_page(previous);
                }
            }
            KeyCode::Down => {
                if self.selected + 1 < self.current_len() {
                    self.selected += 1;
                }
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Char('b') => {
                if self.tab == ShelfTab::AllBooks {
                    if let Some(book) = self.selected_book().filter(|b| b.is_available()) {
                        return ShelfAction::Borrow(book.id);
                    }
                }
            }
            KeyCode::Char('r') => {
                if self.tab == ShelfTab::Borrowed {
                    if let Some(loan) = self.selected_loan().filter(|b| !b.returned) {
                        return ShelfAction::Return(loan.id);
                    }
                }
            }
            KeyCode::Char('s') => {
                if self.tab == ShelfTab::MyBooks {
                    if let Some(book) = self.selected_book() {
                        return ShelfAction::ToggleShareable(book.id);
                    }
                }
            }
            KeyCode::Char('a') => match self.tab {
                ShelfTab::MyBooks => {
                    if let Some(book) = self.selected_book() {
                        return ShelfAction::ToggleArchived(book.id);
                    }
                }
                ShelfTab::Returned => {
                    if let Some(loan) = self
                        .selected_loan()
                        .filter(|b| b.returned && !b.return_approved)
                    {
                        return ShelfAction::ApproveReturn(loan.id);
                    }
                }
                ShelfTab::AllBooks | ShelfTab::Borrowed => {}
            },
            _ => {}
        }

        ShelfAction::None
    }

    fn owned_status(book: &Book) -> &'static str {
        if book.archived {
            "archived"
        } else if book.shareable {
            "shareable"
        } else {
            "private"
        }
    }

    fn book_rows<'a>(
        &self,
        books: &'a [Book],
        status_of: impl Fn(&'a Book) -> String,
    ) -> Vec<Row<'static>> {
        books
            .iter()
            .enumerate()
            .map(|(i, book)| {
                let style = if i == self.selected {
                    Style::default().bg(Color::DarkGray).fg(Color::White)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Row::new(vec![
                    book.title.clone(),
                    book.author_name.clone(),
                    book.isbn.clone(),
                    format!("{:.1}", book.rate),
                    status_of(book),
                ])
                .style(style)
            })
            .collect()
    }

    fn loan_rows(&self, loans: &[BorrowedBook]) -> Vec<Row<'static>> {
        loans
            .iter()
            .enumerate()
            .map(|(i, loan)| {
                let style = if i == self.selected {
                    Style::default().bg(Color::DarkGray).fg(Color::White)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let state = if loan.return_approved {
                    "return approved"
                } else if loan.returned {
                    "returned"
                } else {
                    "borrowed"
                };
                Row::new(vec![
                    loan.title.clone(),
                    loan.author_name.clone(),
                    loan.isbn.clone(),
                    format!("{:.1}", loan.rate),
                    state.to_string(),
                ])
                .style(style)
            })
            .collect()
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let [tabs_area, table_area, meta_area, hints_area] = layout.areas(area);

        let titles = ShelfTab::ALL.iter().map(|tab| tab.title());
        Tabs::new(titles)
            .select(self.tab.index())
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .render(tabs_area, buf);

        let (rows, last_column) = match self.tab {
            ShelfTab::MyBooks => (
                self.book_rows(&self.my_books.content, |book| {
                    Self::owned_status(book).to_string()
                }),
                "Status",
            ),
            ShelfTab::AllBooks => (
                self.book_rows(&self.all_books.content, |book| {
                    if book.is_available() { "yes" } else { "no" }.to_string()
                }),
                "Available",
            ),
            ShelfTab::Borrowed => (self.loan_rows(&self.borrowed.content), "State"),
            ShelfTab::Returned => (self.loan_rows(&self.returned.content), "State"),
        };

        let header = Row::new(vec!["Title", "Author", "ISBN", "Rate", last_column])
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

        let table = Table::new(
            rows,
            [
                Constraint::Fill(2),
                Constraint::Fill(1),
                Constraint::Length(15),
                Constraint::Length(5),
                Constraint::Length(16),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Shelf "));
        Widget::render(table, table_area, buf);

        let (number, total_pages, _, _) = self.current_meta();
        let meta = if self.loading {
            Line::from(Span::styled(
                "Loading...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else if let Some((message, is_error)) = &self.status {
            let color = if *is_error { Color::Red } else { Color::Green };
            Line::from(Span::styled(message.clone(), Style::default().fg(color)))
        } else {
            Line::from(Span::styled(
                format!("Page {}/{}", number + 1, total_pages.max(1)),
                Style::default().fg(Color::DarkGray),
            ))
        };
        Paragraph::new(meta).render(meta_area, buf);

        let hint_text = match self.tab {
            ShelfTab::MyBooks => "s: Shareable | a: Archive",
            ShelfTab::AllBooks => "b: Borrow",
            ShelfTab::Borrowed => "r: Return",
            ShelfTab::Returned => "a: Approve return",
        };
        let hints = Line::from(vec![
            Span::styled("Tab/1-4: Lists", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("n/p: Page", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled(hint_text, Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("l: Logout", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("q: Quit", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(hints).render(hints_area, buf);
    }
}

impl Widget for &ShelfScreenState {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_book(id: i64, shareable: bool) -> Book {
        Book {
            id: BookId(id),
            title: format!("Book {id}"),
            author_name: "Author".to_string(),
            isbn: "0000000000000".to_string(),
            synopsis: String::new(),
            owner: "owner".to_string(),
            rate: 3.0,
            archived: false,
            shareable,
        }
    }

    fn make_loan(id: i64, returned: bool, return_approved: bool) -> BorrowedBook {
        BorrowedBook {
            id: BookId(id),
            title: format!("Loan {id}"),
            author_name: "Author".to_string(),
            isbn: "0000000000000".to_string(),
            rate: 3.0,
            returned,
            return_approved,
        }
    }

    fn make_page(books: Vec<Book>, number: u32, total_pages: u32) -> Page<Book> {
        let first = number == 0;
        let last = number + 1 >= total_pages;
        Page {
            size: books.len() as u32,
            total_elements: u64::from(total_pages) * books.len() as u64,
            content: books,
            number,
            total_pages,
            first,
            last,
        }
    }

    fn loans_page(loans: Vec<BorrowedBook>) -> Page<BorrowedBook> {
        Page {
            size: loans.len() as u32,
            total_elements: loans.len() as u64,
            content: loans,
            number: 0,
            total_pages: 1,
            first: true,
            last: true,
        }
    }

    #[test]
    fn test_tab_switch_requests_first_page() {
        let mut state = ShelfScreenState::new(10);

        let action = state.handle_key(key(KeyCode::Tab));

        assert_eq!(
            action,
            ShelfAction::Load(
                ShelfTab::AllBooks,
                ListParams {
                    page: Some(0),
                    size: Some(10)
                }
            )
        );
    }

    #[test]
    fn test_tab_cycle_includes_returned() {
        let mut state = ShelfScreenState::new(10);
        state.handle_key(key(KeyCode::Tab));
        state.handle_key(key(KeyCode::Tab));

        let action = state.handle_key(key(KeyCode::Tab));

        assert!(matches!(action, ShelfAction::Load(ShelfTab::Returned, _)));
    }

    #[test]
    fn test_next_page_request_uses_backend_metadata() {
        let mut state = ShelfScreenState::new(10);
        state.apply_books(ShelfTab::MyBooks, make_page(vec![make_book(1, true)], 0, 3));

        let action = state.handle_key(key(KeyCode::Char('n')));

        assert_eq!(
            action,
            ShelfAction::Load(
                ShelfTab::MyBooks,
                ListParams {
                    page: Some(1),
                    size: Some(10)
                }
            )
        );
    }

    #[test]
    fn test_no_next_page_on_last_page() {
        let mut state = ShelfScreenState::new(10);
        state.apply_books(ShelfTab::MyBooks, make_page(vec![make_book(1, true)], 2, 3));

        assert_eq!(state.handle_key(key(KeyCode::Char('n'))), ShelfAction::None);
    }

    #[test]
    fn test_current_page_params_follow_shown_page() {
        let mut state = ShelfScreenState::new(10);
        state.apply_books(ShelfTab::MyBooks, make_page(vec![make_book(1, true)], 2, 5));

        assert_eq!(
            state.current_page_params(),
            ListParams {
                page: Some(2),
                size: Some(10)
            }
        );
    }

    #[test]
    fn test_borrow_only_available_books_on_all_tab() {
        let mut state = ShelfScreenState::new(10);
        state.handle_key(key(KeyCode::Char('2')));
        state.apply_books(
            ShelfTab::AllBooks,
            make_page(vec![make_book(5, false), make_book(6, true)], 0, 1),
        );

        assert_eq!(state.handle_key(key(KeyCode::Char('b'))), ShelfAction::None);

        state.handle_key(key(KeyCode::Down));
        assert_eq!(
            state.handle_key(key(KeyCode::Char('b'))),
            ShelfAction::Borrow(BookId(6))
        );
    }

    #[test]
    fn test_return_selected_borrowed_book() {
        let mut state = ShelfScreenState::new(10);
        state.handle_key(key(KeyCode::Char('3')));
        state.apply_loans(ShelfTab::Borrowed, loans_page(vec![make_loan(9, false, false)]));

        assert_eq!(
            state.handle_key(key(KeyCode::Char('r'))),
            ShelfAction::Return(BookId(9))
        );
    }

    #[test]
    fn test_owner_toggles_on_my_books_tab() {
        let mut state = ShelfScreenState::new(10);
        state.apply_books(ShelfTab::MyBooks, make_page(vec![make_book(4, true)], 0, 1));

        assert_eq!(
            state.handle_key(key(KeyCode::Char('s'))),
            ShelfAction::ToggleShareable(BookId(4))
        );
        assert_eq!(
            state.handle_key(key(KeyCode::Char('a'))),
            ShelfAction::ToggleArchived(BookId(4))
        );
    }

    #[test]
    fn test_approve_only_pending_returns() {
        let mut state = ShelfScreenState::new(10);
        state.handle_key(key(KeyCode::Char('4')));
        state.apply_loans(
            ShelfTab::Returned,
            loans_page(vec![make_loan(8, true, true), make_loan(9, true, false)]),
        );

        assert_eq!(state.handle_key(key(KeyCode::Char('a'))), ShelfAction::None);

        state.handle_key(key(KeyCode::Down));
        assert_eq!(
            state.handle_key(key(KeyCode::Char('a'))),
            ShelfAction::ApproveReturn(BookId(9))
        );
    }

    #[test]
    fn test_owned_status_shows_flags_not_availability() {
        let mut archived = make_book(1, true);
        archived.archived = true;

        assert_eq!(ShelfScreenState::owned_status(&archived), "archived");
        assert_eq!(ShelfScreenState::owned_status(&make_book(2, true)), "shareable");
        assert_eq!(ShelfScreenState::owned_status(&make_book(3, false)), "private");
    }

    #[test]
    fn test_keys_ignored_while_loading() {
        let mut state = ShelfScreenState::new(10);
        state.set_loading();

        assert_eq!(state.handle_key(key(KeyCode::Tab)), ShelfAction::None);
    }

    #[test]
    fn test_logout_and_quit() {
        let mut state = ShelfScreenState::new(10);
        assert_eq!(state.handle_key(key(KeyCode::Char('l'))), ShelfAction::Logout);
        assert_eq!(state.handle_key(key(KeyCode::Char('q'))), ShelfAction::Quit);
    }
}
