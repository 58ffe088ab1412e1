//! Integration tests driving the public desk API

use circdesk::models::{BookStatus, PaymentOutcome};
use circdesk::{Desk, DeskError};
use rust_decimal::Decimal;

fn dec(text: &str) -> Decimal {
    text.parse().expect("valid decimal literal")
}

#[test]
fn added_book_lists_as_available() {
    let desk = Desk::new();
    desk.catalog.add_book("Dune").unwrap();

    let rows = desk.catalog.list_books();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Dune");
    assert_eq!(rows[0].status, BookStatus::Available);
}

#[test]
fn duplicate_titles_are_separate_entries() {
    let desk = Desk::new();
    desk.catalog.add_book("Dune").unwrap();
    desk.catalog.add_book("Dune").unwrap();

    assert_eq!(desk.catalog.list_books().len(), 2);

    // Removing takes one entry at a time.
    desk.catalog.remove_book("Dune").unwrap();
    assert_eq!(desk.catalog.list_books().len(), 1);
    desk.catalog.remove_book("Dune").unwrap();
    assert!(desk.catalog.list_books().is_empty());
}

#[test]
fn blank_inputs_are_validation_errors() {
    let desk = Desk::new();
    assert!(matches!(
        desk.catalog.add_book("   "),
        Err(DeskError::Validation(_))
    ));
    assert!(matches!(
        desk.catalog.remove_book(""),
        Err(DeskError::Validation(_))
    ));
    assert!(matches!(
        desk.members.add_member(""),
        Err(DeskError::Validation(_))
    ));
    assert!(matches!(
        desk.members.remove_member(" "),
        Err(DeskError::Validation(_))
    ));
    assert!(matches!(
        desk.circulation.borrow_book("", "Dune"),
        Err(DeskError::Validation(_))
    ));
    assert!(matches!(
        desk.circulation.borrow_book("Bob", ""),
        Err(DeskError::Validation(_))
    ));
    assert!(matches!(
        desk.circulation.return_book(""),
        Err(DeskError::Validation(_))
    ));
}

#[test]
fn removing_unknown_book_is_not_found() {
    let desk = Desk::new();
    assert!(matches!(
        desk.catalog.remove_book("Dune"),
        Err(DeskError::NotFound(_))
    ));
}

#[test]
fn removing_a_book_clears_its_loan_entry() {
    let desk = Desk::new();
    desk.catalog.add_book("Dune").unwrap();
    desk.members.add_member("Bob").unwrap();
    desk.circulation.borrow_book("Bob", "Dune").unwrap();

    desk.catalog.remove_book("Dune").unwrap();
    assert!(desk.catalog.list_books().is_empty());
    assert!(desk.circulation.list_loans().is_empty());
}

#[test]
fn double_borrow_conflicts_until_returned() {
    let desk = Desk::new();
    desk.catalog.add_book("Dune").unwrap();
    desk.members.add_member("Bob").unwrap();
    desk.members.add_member("Alice").unwrap();

    desk.circulation.borrow_book("Bob", "Dune").unwrap();
    assert!(matches!(
        desk.circulation.borrow_book("Alice", "Dune"),
        Err(DeskError::Conflict(_))
    ));
    assert!(matches!(
        desk.circulation.borrow_book("Bob", "Dune"),
        Err(DeskError::Conflict(_))
    ));

    desk.circulation.return_book("Dune").unwrap();
    desk.circulation.borrow_book("Alice", "Dune").unwrap();

    let loans = desk.circulation.list_loans();
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].borrower, "Alice");
}

#[test]
fn borrow_checks_member_before_book() {
    let desk = Desk::new();
    desk.catalog.add_book("Dune").unwrap();

    // Unknown member, even for an unknown book.
    let err = desk.circulation.borrow_book("Nobody", "Hyperion").unwrap_err();
    assert_eq!(err, DeskError::NotFound("Member not found!".to_string()));

    desk.members.add_member("Bob").unwrap();
    let err = desk.circulation.borrow_book("Bob", "Hyperion").unwrap_err();
    assert_eq!(err, DeskError::NotFound("Book not found!".to_string()));
}

#[test]
fn returning_an_unborrowed_book_is_not_found() {
    let desk = Desk::new();
    desk.catalog.add_book("Dune").unwrap();
    assert!(matches!(
        desk.circulation.return_book("Dune"),
        Err(DeskError::NotFound(_))
    ));
}

#[test]
fn loan_listing_keeps_insertion_order_across_removals() {
    let desk = Desk::new();
    for title in ["Dune", "Foundation", "Hyperion"] {
        desk.catalog.add_book(title).unwrap();
    }
    desk.members.add_member("Bob").unwrap();
    for title in ["Dune", "Foundation", "Hyperion"] {
        desk.circulation.borrow_book("Bob", title).unwrap();
    }

    desk.circulation.return_book("Foundation").unwrap();
    let titles: Vec<_> = desk
        .circulation
        .list_loans()
        .into_iter()
        .map(|row| row.title)
        .collect();
    assert_eq!(titles, vec!["Dune", "Hyperion"]);
}

#[test]
fn fines_accumulate_and_settle_in_full() {
    let desk = Desk::new();
    desk.members.add_member("Alice").unwrap();

    desk.fines.assign_fine("Alice", "10.00").unwrap();
    desk.fines.assign_fine("Alice", "5.00").unwrap();

    let rows = desk.members.list_members();
    assert_eq!(rows[0].fine, Some(dec("15.00")));

    assert_eq!(
        desk.fines.pay_fine("Alice", "15.00").unwrap(),
        PaymentOutcome::PaidInFull
    );
    assert_eq!(desk.members.list_members()[0].fine, None);

    // A further payment finds nothing to settle.
    assert_eq!(
        desk.fines.pay_fine("Alice", "20.00").unwrap(),
        PaymentOutcome::NoFine
    );
}

#[test]
fn partial_payment_leaves_the_remainder() {
    let desk = Desk::new();
    desk.members.add_member("Alice").unwrap();
    desk.fines.assign_fine("Alice", "12.50").unwrap();

    assert_eq!(
        desk.fines.pay_fine("Alice", "4.25").unwrap(),
        PaymentOutcome::Partial {
            remaining: dec("8.25")
        }
    );
    assert_eq!(desk.members.list_members()[0].fine, Some(dec("8.25")));
}

#[test]
fn assign_fine_checks_member_before_amount() {
    let desk = Desk::new();
    // Unknown member wins over the unparseable amount.
    assert!(matches!(
        desk.fines.assign_fine("Nobody", "not-a-number"),
        Err(DeskError::NotFound(_))
    ));

    desk.members.add_member("Alice").unwrap();
    assert!(matches!(
        desk.fines.assign_fine("Alice", "not-a-number"),
        Err(DeskError::InvalidAmount(_))
    ));
    // A failed parse must not create an entry.
    assert_eq!(desk.members.list_members()[0].fine, None);
}

#[test]
fn fine_amounts_are_not_range_checked() {
    let desk = Desk::new();
    desk.members.add_member("Alice").unwrap();

    desk.fines.assign_fine("Alice", "0").unwrap();
    assert_eq!(desk.members.list_members()[0].fine, Some(dec("0")));

    desk.fines.assign_fine("Alice", "-3.00").unwrap();
    assert_eq!(desk.members.list_members()[0].fine, Some(dec("-3.00")));

    // Any payment >= a negative balance settles it.
    assert_eq!(
        desk.fines.pay_fine("Alice", "0").unwrap(),
        PaymentOutcome::PaidInFull
    );
}

#[test]
fn invalid_payment_text_is_rejected_and_balance_kept() {
    let desk = Desk::new();
    desk.members.add_member("Alice").unwrap();
    desk.fines.assign_fine("Alice", "5.00").unwrap();

    assert!(matches!(
        desk.fines.pay_fine("Alice", "five"),
        Err(DeskError::InvalidAmount(_))
    ));
    assert_eq!(desk.members.list_members()[0].fine, Some(dec("5.00")));
}

#[test]
fn removing_a_member_frees_their_loans_and_fine() {
    let desk = Desk::new();
    for title in ["Dune", "Foundation"] {
        desk.catalog.add_book(title).unwrap();
    }
    desk.members.add_member("Bob").unwrap();
    desk.circulation.borrow_book("Bob", "Dune").unwrap();
    desk.circulation.borrow_book("Bob", "Foundation").unwrap();
    desk.fines.assign_fine("Bob", "2.00").unwrap();

    desk.members.remove_member("Bob").unwrap();

    assert!(desk.circulation.list_loans().is_empty());
    assert!(desk.members.list_members().is_empty());
    // The books stay in the catalog, available again.
    let rows = desk.catalog.list_books();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.status == BookStatus::Available));
    // No fine entry lingers for the departed name.
    assert_eq!(desk.members.member_summary("Bob").fine, None);
}

#[test]
fn removing_unknown_member_is_not_found() {
    let desk = Desk::new();
    assert!(matches!(
        desk.members.remove_member("Nobody"),
        Err(DeskError::NotFound(_))
    ));
}

#[test]
fn search_is_case_insensitive_substring_in_catalog_order() {
    let desk = Desk::new();
    for title in ["Dune", "Dune Messiah", "Foundation"] {
        desk.catalog.add_book(title).unwrap();
    }

    let titles: Vec<_> = desk
        .catalog
        .search_books("dUnE")
        .into_iter()
        .map(|row| row.title)
        .collect();
    assert_eq!(titles, vec!["Dune", "Dune Messiah"]);

    assert!(desk.catalog.search_books("tolkien").is_empty());
    // A blank query matches nothing, even against a populated catalog.
    assert!(desk.catalog.search_books("").is_empty());
    assert!(desk.catalog.search_books("  ").is_empty());
}

#[test]
fn member_summary_is_lenient_about_unknown_names() {
    let desk = Desk::new();
    let summary = desk.members.member_summary("Nobody");
    assert_eq!(summary.fine, None);
    assert!(summary.borrowed.is_empty());

    // Even a blank name yields an empty summary rather than an error.
    let summary = desk.members.member_summary("");
    assert_eq!(summary.fine, None);
    assert!(summary.borrowed.is_empty());
}

#[test]
fn circulation_scenario_end_to_end() {
    let desk = Desk::new();
    desk.catalog.add_book("Dune").unwrap();
    desk.catalog.add_book("Foundation").unwrap();
    desk.members.add_member("Bob").unwrap();

    desk.circulation.borrow_book("Bob", "Dune").unwrap();

    let hits = desk.catalog.search_books("du");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Dune");
    assert_eq!(hits[0].status, BookStatus::Borrowed);

    let rows = desk.catalog.list_books();
    assert_eq!(
        rows.iter()
            .map(|row| (row.title.as_str(), row.status))
            .collect::<Vec<_>>(),
        vec![
            ("Dune", BookStatus::Borrowed),
            ("Foundation", BookStatus::Available)
        ]
    );

    let summary = desk.members.member_summary("Bob");
    assert_eq!(summary.fine, None);
    assert_eq!(summary.borrowed, vec!["Dune"]);
}
