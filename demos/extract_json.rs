//! Serialize extracted records the way an HTTP consumer would: a JSON array
//! of objects keyed Date / Description / Ref / Withdrawals / Deposits /
//! Balance, absent fields as empty strings.

use statement_ocr_rs::extract_pages;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let pages = vec![
        "2024-01-15  Grocery Store  123  45.67  5,000.00\n2024-05-01  Service Fee  -50.00",
        "page with no transaction lines",
        "2024-02-02  Salary Deposit  1,234.56  10,500.00",
    ];

    let records: Vec<_> = extract_pages(pages)
        .into_iter()
        .flat_map(|page| page.records)
        .collect();

    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}
