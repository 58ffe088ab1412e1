//! Interactive terminal shell
//!
//! The shell owns no business state. It collects trimmed input from stdin,
//! invokes desk operations, and renders results or error notifications; the
//! menu graph is main menu -> staff/member dashboards -> individual actions.
//! "Login" is navigation only, not identity verification.

use std::io::{self, Write};

use rust_decimal::Decimal;

use crate::{
    config::DisplayConfig,
    models::{BookRow, PaymentOutcome},
    services::Desk,
    DeskError,
};

pub struct Shell {
    desk: Desk,
    display: DisplayConfig,
}

impl Shell {
    pub fn new(desk: Desk, display: DisplayConfig) -> Self {
        Self { desk, display }
    }

    /// Run the menu loop until the user exits or stdin closes.
    pub fn run(&self) {
        loop {
            println!();
            println!("=== {} ===", self.display.banner);
            println!("  1) Staff Login");
            println!("  2) Member Login");
            println!("  0) Exit");
            match self.prompt("Select an option:").as_deref() {
                Some("1") => self.staff_menu(),
                Some("2") => self.member_menu(),
                Some("0") | None => break,
                Some(_) => println!("Unknown option."),
            }
        }
    }

    fn staff_menu(&self) {
        loop {
            println!();
            println!("--- Staff Dashboard ---");
            println!("  1) Manage Books");
            println!("  2) Manage Members");
            println!("  3) View All Loans");
            println!("  4) Assign Fine");
            println!("  0) Back to Main Menu");
            match self.prompt("Select an option:").as_deref() {
                Some("1") => self.book_management(),
                Some("2") => self.member_management(),
                Some("3") => self.view_all_loans(),
                Some("4") => self.assign_fine(),
                Some("0") | None => break,
                Some(_) => println!("Unknown option."),
            }
        }
    }

    fn member_menu(&self) {
        loop {
            println!();
            println!("--- Member Dashboard ---");
            println!("  1) Browse Books");
            println!("  2) Search Books");
            println!("  3) Borrow Book");
            println!("  4) Return Book");
            println!("  5) Pay Fine");
            println!("  6) View My Loans/Fines");
            println!("  0) Back to Main Menu");
            match self.prompt("Select an option:").as_deref() {
                Some("1") => self.browse_books(),
                Some("2") => self.search_books(),
                Some("3") => self.borrow_book(),
                Some("4") => self.return_book(),
                Some("5") => self.pay_fine(),
                Some("6") => self.view_account_summary(),
                Some("0") | None => break,
                Some(_) => println!("Unknown option."),
            }
        }
    }

    fn book_management(&self) {
        loop {
            println!();
            println!("--- Book Management ---");
            println!("  1) Add New Book");
            println!("  2) Remove Book");
            println!("  3) View All Books");
            println!("  0) Back to Staff Menu");
            match self.prompt("Select an option:").as_deref() {
                Some("1") => self.add_book(),
                Some("2") => self.remove_book(),
                Some("3") => self.browse_books(),
                Some("0") | None => break,
                Some(_) => println!("Unknown option."),
            }
        }
    }

    fn member_management(&self) {
        loop {
            println!();
            println!("--- Member Management ---");
            println!("  1) Add New Member");
            println!("  2) Remove Member");
            println!("  3) View All Members");
            println!("  0) Back to Staff Menu");
            match self.prompt("Select an option:").as_deref() {
                Some("1") => self.add_member(),
                Some("2") => self.remove_member(),
                Some("3") => self.view_members(),
                Some("0") | None => break,
                Some(_) => println!("Unknown option."),
            }
        }
    }

    // ----- staff actions -----

    fn add_book(&self) {
        // A blank or cancelled prompt silently returns to the menu.
        let Some(title) = self.prompt("Enter book title:") else {
            return;
        };
        self.report(self.desk.catalog.add_book(&title), "Book added successfully!");
    }

    fn remove_book(&self) {
        let Some(title) = self.prompt("Enter book title to remove:") else {
            return;
        };
        self.report(self.desk.catalog.remove_book(&title), "Book removed successfully!");
    }

    fn add_member(&self) {
        let Some(name) = self.prompt("Enter member name:") else {
            return;
        };
        self.report(self.desk.members.add_member(&name), "Member added successfully!");
    }

    fn remove_member(&self) {
        let Some(name) = self.prompt("Enter member name to remove:") else {
            return;
        };
        self.report(self.desk.members.remove_member(&name), "Member removed successfully!");
    }

    fn view_members(&self) {
        let rows = self.desk.members.list_members();
        println!();
        println!("Registered Members");
        if rows.is_empty() {
            println!("No members registered.");
            return;
        }
        println!("{:<30} {}", "Name", "Fines");
        for row in rows {
            let fine = match row.fine {
                Some(amount) => self.money(amount),
                None => "None".to_string(),
            };
            println!("{:<30} {}", row.name, fine);
        }
    }

    fn view_all_loans(&self) {
        let rows = self.desk.circulation.list_loans();
        println!();
        println!("Current Loans");
        if rows.is_empty() {
            println!("No active loans.");
            return;
        }
        println!("{:<40} {}", "Book", "Borrowed by");
        for row in rows {
            println!("{:<40} {}", row.title, row.borrower);
        }
    }

    fn assign_fine(&self) {
        let Some(member) = self.prompt("Enter member name:") else {
            return;
        };
        // The member check comes before the amount prompt, so an unknown
        // name is reported without asking for an amount.
        if !self.desk.members.list_members().iter().any(|r| r.name == member) {
            self.notify_error("Member not found!");
            return;
        }
        let Some(amount) = self.prompt("Enter fine amount:") else {
            return;
        };
        self.report(
            self.desk.fines.assign_fine(&member, &amount),
            "Fine assigned successfully!",
        );
    }

    // ----- member actions -----

    fn browse_books(&self) {
        let rows = self.desk.catalog.list_books();
        println!();
        println!("Available Books");
        if rows.is_empty() {
            println!("No books available.");
            return;
        }
        self.print_book_rows(&rows);
    }

    fn search_books(&self) {
        let Some(query) = self.prompt("Enter book title to search:") else {
            return;
        };
        let rows = self.desk.catalog.search_books(&query);
        println!();
        println!("Search Results");
        if rows.is_empty() {
            println!("No books found matching '{}'", query);
            return;
        }
        self.print_book_rows(&rows);
    }

    fn borrow_book(&self) {
        let Some(member) = self.prompt("Enter your name:") else {
            return;
        };
        if !self.desk.members.list_members().iter().any(|r| r.name == member) {
            self.notify_error("Member not found!");
            return;
        }
        let Some(title) = self.prompt("Enter book title:") else {
            return;
        };
        self.report(
            self.desk.circulation.borrow_book(&member, &title),
            "Book borrowed successfully!",
        );
    }

    fn return_book(&self) {
        let Some(title) = self.prompt("Enter book title to return:") else {
            return;
        };
        self.report(
            self.desk.circulation.return_book(&title),
            "Book returned successfully!",
        );
    }

    fn pay_fine(&self) {
        let Some(member) = self.prompt("Enter your name:") else {
            return;
        };
        let summary = self.desk.members.member_summary(&member);
        let Some(balance) = summary.fine else {
            println!("No fines found for this member.");
            return;
        };
        println!("Your current fine is: {}", self.money(balance));
        let Some(payment) = self.prompt("Enter payment amount:") else {
            return;
        };
        match self.desk.fines.pay_fine(&member, &payment) {
            Ok(PaymentOutcome::PaidInFull) => println!("Fine paid in full. Thank you!"),
            Ok(PaymentOutcome::Partial { remaining }) => println!(
                "Partial payment received. Remaining balance: {}",
                self.money(remaining)
            ),
            Ok(PaymentOutcome::NoFine) => println!("No fines found for this member."),
            Err(err) => self.notify_error(err.message()),
        }
    }

    fn view_account_summary(&self) {
        let Some(member) = self.prompt("Enter your name:") else {
            return;
        };
        let summary = self.desk.members.member_summary(&member);
        println!();
        println!("Your Account Summary");
        match summary.fine {
            Some(amount) => println!("Outstanding Fines: {}", self.money(amount)),
            None => println!("You have no outstanding fines."),
        }
        println!("Books Currently Borrowed:");
        if summary.borrowed.is_empty() {
            println!("  You have no books currently borrowed.");
        } else {
            for title in summary.borrowed {
                println!("  - {}", title);
            }
        }
    }

    // ----- rendering helpers -----

    fn print_book_rows(&self, rows: &[BookRow]) {
        println!("{:<40} {}", "Title", "Status");
        for row in rows {
            println!("{:<40} {}", row.title, row.status);
        }
    }

    fn money(&self, amount: Decimal) -> String {
        format!("{}{:.2}", self.display.currency, amount)
    }

    fn report(&self, result: Result<(), DeskError>, success: &str) {
        match result {
            Ok(()) => println!("{}", success),
            Err(err) => self.notify_error(err.message()),
        }
    }

    fn notify_error(&self, message: &str) {
        println!("Error: {}", message);
    }

    /// Print a prompt and read one trimmed line. `None` means the user
    /// cancelled (blank input) or stdin closed.
    fn prompt(&self, label: &str) -> Option<String> {
        print!("{} ", label);
        io::stdout().flush().ok();
        let mut line = String::new();
        let read = io::stdin().read_line(&mut line).unwrap_or(0);
        if read == 0 {
            return None;
        }
        let value = line.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}
