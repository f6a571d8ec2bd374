use audit::{audit_columns, audit_dataset};
use tabular::read_dataset;

const SAMPLE_CSV: &str = "\
0.97,0.35,0.12,0.0
1.0,,0.25,2.0
0.88,0.41,,1.0
";

fn main() {
    println!("=== ECG Column Audit Demo ===\n");

    let dataset = read_dataset(SAMPLE_CSV.as_bytes()).expect("sample CSV should parse");
    println!(
        "Loaded {} rows x {} columns",
        dataset.row_count(),
        dataset.column_count()
    );

    let report = audit_dataset(&dataset, "Demo Sample");

    println!("\n--- {} Dataset ---", report.dataset);
    println!(
        "{:<3} {:<12} {:<8} {:<24} {:<6} {:<9} {:<9} {}",
        "#", "Name", "Role", "Description", "Avail", "Type", "Missing", "Class"
    );
    for r in &report.records {
        println!(
            "{:<3} {:<12} {:<8} {:<24} {:<6} {:<9} {:<9} {}",
            r.index,
            r.display_name,
            r.role,
            r.description,
            if r.available_before_prediction { "Yes" } else { "No" },
            r.detailed_type,
            r.missing_percentage,
            r.variable_class,
        );
    }

    println!("\nFingerprint: {}", hex::encode(report.fingerprint));

    // Same input, same output
    let again = audit_columns(&dataset);
    println!(
        "Idempotent: {}",
        if again == report.records { "OK" } else { "MISMATCH" }
    );
}
