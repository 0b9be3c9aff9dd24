use coinbook_cli::{run_session, ExitReason};
use std::io::Cursor;

fn run_script(script: &str) -> (ExitReason, String) {
    let mut output = Vec::new();
    let reason = run_session(Cursor::new(script.as_bytes().to_vec()), &mut output).unwrap();
    (reason, String::from_utf8(output).unwrap())
}

fn menu_count(output: &str) -> usize {
    output.matches("Menu:").count()
}

#[test]
fn exit_option_stops_loop() {
    let (reason, output) = run_script("4\n");

    assert_eq!(reason, ExitReason::ExitSelected);
    assert_eq!(menu_count(&output), 1);
    assert!(output.ends_with("Exiting the program.\n"));
}

#[test]
fn end_of_input_stops_loop_like_exit() {
    let (reason, output) = run_script("2\n");

    assert_eq!(reason, ExitReason::EndOfInput);
    assert_eq!(menu_count(&output), 2);
}

#[test]
fn add_prints_normalized_record() {
    let (_, output) = run_script("1\n  france \n euro \n1999\n4\n");

    assert!(output.contains("Enter the coin's country: "));
    assert!(output.contains("Enter the coin's denomination: "));
    assert!(output.contains("Enter the coin's issue year: "));
    assert!(output
        .contains("Coin added: ID: 1, Country: France, Denomination: Euro, Issue year: 1999\n"));
}

#[test]
fn list_on_empty_store_reports_empty() {
    let (_, output) = run_script("2\n4\n");

    assert!(output.contains("The coin list is empty.\n"));
    assert!(!output.contains("Coin list:"));
}

#[test]
fn list_prints_records_in_insertion_order() {
    let (_, output) = run_script("1\nperu\nsol\n1991\n1\nchile\npeso\n1985\n2\n4\n");

    let listing = output.split("Coin list:\n").nth(1).unwrap();
    let mut lines = listing.lines();
    assert_eq!(
        lines.next(),
        Some("ID: 1, Country: Peru, Denomination: Sol, Issue year: 1991")
    );
    assert_eq!(
        lines.next(),
        Some("ID: 2, Country: Chile, Denomination: Peso, Issue year: 1985")
    );
}

#[test]
fn delete_removes_record_and_keeps_other_id() {
    let script = "1\nitaly\nlira\n1970\n1\ngreece\ndrachma\n1976\n3\n1\n2\n4\n";
    let (_, output) = run_script(script);

    assert!(output.contains(
        "Coin removed: ID: 1, Country: Italy, Denomination: Lira, Issue year: 1970\n"
    ));
    let listing = output.split("Coin list:\n").nth(1).unwrap();
    assert_eq!(
        listing.lines().next(),
        Some("ID: 2, Country: Greece, Denomination: Drachma, Issue year: 1976")
    );
    assert!(!listing.contains("Italy"));
}

#[test]
fn delete_missing_id_reports_not_found() {
    let (reason, output) = run_script("3\n9\n2\n4\n");

    assert_eq!(reason, ExitReason::ExitSelected);
    assert!(output.contains("Coin not found.\n"));
    assert!(output.contains("The coin list is empty.\n"));
}

#[test]
fn ids_are_not_reused_after_delete() {
    let (_, output) = run_script("1\na\nb\n1\n3\n1\n1\nc\nd\n2\n4\n");

    assert!(output.contains("Coin added: ID: 2, Country: C, Denomination: D, Issue year: 2\n"));
}

#[test]
fn empty_country_is_rejected_and_loop_continues() {
    let (reason, output) = run_script("1\n\nPeso\n2000\n2\n4\n");

    assert_eq!(reason, ExitReason::ExitSelected);
    assert!(output.contains("Error: country cannot be empty\n"));
    assert!(output.contains("The coin list is empty.\n"));
    assert_eq!(menu_count(&output), 3);
}

#[test]
fn non_integer_year_is_reported_and_menu_redisplayed() {
    let (reason, output) = run_script("1\nmexico\npeso\nnineteen\n2\n4\n");

    assert_eq!(reason, ExitReason::ExitSelected);
    assert!(output.contains("Error: invalid year `nineteen`: expected an integer\n"));
    assert!(output.contains("The coin list is empty.\n"));
    assert_eq!(menu_count(&output), 3);
}

#[test]
fn non_integer_id_is_reported_and_store_unchanged() {
    let (_, output) = run_script("1\njapan\nyen\n1964\n3\nfirst\n2\n4\n");

    assert!(output.contains("Error: invalid ID `first`: expected an integer\n"));
    assert!(output.contains("Coin list:\nID: 1, Country: Japan"));
}

#[test]
fn unknown_selection_is_reported() {
    let (reason, output) = run_script("7\nadd\n4\n");

    assert_eq!(reason, ExitReason::ExitSelected);
    assert_eq!(output.matches("Invalid option. Please try again.\n").count(), 2);
    assert_eq!(menu_count(&output), 3);
}

#[test]
fn end_of_input_during_add_prompts_stops_without_adding() {
    let (reason, output) = run_script("1\nperu\n");

    assert_eq!(reason, ExitReason::EndOfInput);
    assert!(!output.contains("Coin added"));
}

#[test]
fn windows_line_endings_are_accepted() {
    let (reason, output) = run_script("1\r\nspain\r\npeseta\r\n1975\r\n4\r\n");

    assert_eq!(reason, ExitReason::ExitSelected);
    assert!(output.contains("Country: Spain, Denomination: Peseta, Issue year: 1975\n"));
}

#[test]
fn negative_id_is_reported_as_not_found() {
    let (reason, output) = run_script("1\nperu\nsol\n1991\n3\n-1\n2\n4\n");

    assert_eq!(reason, ExitReason::ExitSelected);
    assert!(output.contains("Enter the ID of the coin to delete: Coin not found.\n"));
    assert!(!output.contains("Error:"));
    assert!(output.contains("Coin list:\nID: 1, Country: Peru"));
}

#[test]
fn end_of_input_at_delete_prompt_stops_loop() {
    let (reason, output) = run_script("3\n");

    assert_eq!(reason, ExitReason::EndOfInput);
    assert!(output.ends_with("Enter the ID of the coin to delete: \n"));
    assert!(!output.contains("Coin not found."));
    assert_eq!(menu_count(&output), 1);
}

#[test]
fn padded_selection_is_accepted() {
    let (reason, output) = run_script("  2 \n\t4\t\n");

    assert_eq!(reason, ExitReason::ExitSelected);
    assert!(output.contains("The coin list is empty.\n"));
    assert!(!output.contains("Invalid option."));
}
