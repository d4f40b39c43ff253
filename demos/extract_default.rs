use statement_ocr_rs::ExtractorBuilder;
use std::env;

const SAMPLE_PAGE: &str = "\
ACME BANK            Statement of Account

2024-01-02  Opening Balance                                         1,000.00
2024-01-15  Grocery Store            123    45.67                   5,000.00
2024-02-02  Salary Deposit                  1,234.56                10,500.00
2024-05-01  Service Fee                                             -50.00
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let transactions = if args.len() > 1 {
        let content = std::fs::read_to_string(&args[1])?;
        ExtractorBuilder::new().content(&content).parse()?
    } else {
        println!("Using built-in sample page text\n");
        ExtractorBuilder::new().content(SAMPLE_PAGE).parse()?
    };

    println!("Found {} transactions\n", transactions.len());

    for (i, tx) in transactions.iter().enumerate() {
        println!("Transaction {}:", i + 1);
        println!("  Date: {}", tx.date);
        println!("  Description: {}", tx.description);
        if let Some(reference) = &tx.reference {
            println!("  Ref: {}", reference);
        }
        if let Some(withdrawal) = &tx.withdrawal {
            println!("  Withdrawal: {}", withdrawal);
        }
        if let Some(deposit) = &tx.deposit {
            println!("  Deposit: {}", deposit);
        }
        println!("  Balance: {}", tx.balance);
        println!();
    }

    Ok(())
}
