//! # Seed Data Generator
//!
//! Populates the database with sample pharmacy data for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file (./pharmacy.db)
//! cargo run -p pharma-db --bin seed
//!
//! # Specify a database path
//! cargo run -p pharma-db --bin seed -- --db ./data/pharmacy.db
//! ```
//!
//! Generated products cover common pharmacy categories (analgesics,
//! antibiotics, vitamins, syrups) with realistic prices, stock levels
//! and staggered expiry dates so the dashboard figures are non-trivial.

use chrono::{Duration, Local, NaiveDate};
use std::env;

use pharma_core::validation::{validate_customer, validate_product};
use pharma_core::{NewCustomer, NewProduct};
use pharma_db::{Database, DbConfig};

/// (name, unit, type, manufacturer, purchase, sale, stock, expiry offset days)
const PRODUCTS: &[(&str, &str, &str, &str, f64, f64, i64, i64)] = &[
    ("Paracetamol 500mg", "strip", "tablet", "Acme Pharma", 1.2, 2.0, 120, 400),
    ("Ibuprofen 400mg", "strip", "tablet", "Acme Pharma", 1.8, 3.0, 80, 30),
    ("Amoxicillin 250mg", "box", "capsule", "Medix Labs", 4.5, 7.5, 40, 85),
    ("Vitamin C 1000mg", "bottle", "effervescent", "VitaCorp", 3.0, 5.0, 60, 500),
    ("Cough Syrup 120ml", "bottle", "syrup", "Medix Labs", 2.4, 4.0, 25, 60),
    ("Insulin Glargine", "vial", "injection", "BioSante", 18.0, 27.0, 12, 45),
    ("Omeprazole 20mg", "box", "capsule", "Acme Pharma", 2.7, 4.5, 55, 200),
    ("Saline Nasal Spray", "bottle", "spray", "VitaCorp", 1.5, 2.5, 35, 700),
    ("Cetirizine 10mg", "strip", "tablet", "Medix Labs", 1.0, 1.75, 90, 150),
    ("Hydrocortisone Cream", "tube", "cream", "BioSante", 2.1, 3.5, 20, 75),
];

const CUSTOMERS: &[(&str, i64, &str, &str)] = &[
    ("Maryam Haddad", 47, "0555-101010", "hypertension"),
    ("Omar Said", 34, "0555-202020", "seasonal allergy"),
    ("Leila Mansour", 61, "0555-303030", "type 2 diabetes"),
    ("Sami Khalil", 28, "0555-404040", "migraine"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let db_path = parse_db_path().unwrap_or_else(|| "pharmacy.db".to_string());

    println!("Seeding database: {}", db_path);
    let db = Database::new(DbConfig::new(&db_path)).await?;

    let today = Local::now().date_naive();

    let products = db.products();
    for &(name, unit, kind, manufacturer, purchase, sale, stock, expiry_offset) in PRODUCTS {
        let product = seed_product(name, unit, kind, manufacturer, purchase, sale, stock, today + Duration::days(expiry_offset));
        validate_product(&product)?;
        let id = products.insert(&product).await?;
        println!("  product #{id}: {name}");
    }

    let customers = db.customers();
    for &(name, age, phone, diagnosis) in CUSTOMERS {
        let customer = NewCustomer {
            name: name.to_string(),
            age: Some(age),
            phone: Some(phone.to_string()),
            diagnosis: Some(diagnosis.to_string()),
            last_visit: Some(today),
        };
        validate_customer(&customer)?;
        let id = customers.insert(&customer).await?;
        println!("  customer #{id}: {name}");
    }

    let summary = db.dashboard_summary(pharma_core::DEFAULT_EXPIRY_WINDOW_DAYS).await?;
    println!();
    println!("Dashboard after seeding:");
    println!("  products:      {}", summary.total_products);
    println!("  customers:     {}", summary.total_customers);
    println!("  today's sales: {:.2}", summary.today_sales);
    println!("  expiring soon: {}", summary.expiring_soon);

    db.close().await;
    println!();
    println!("Seed complete");

    Ok(())
}

/// Builds one seed product.
#[allow(clippy::too_many_arguments)]
fn seed_product(
    name: &str,
    unit: &str,
    kind: &str,
    manufacturer: &str,
    purchase_price: f64,
    sale_price: f64,
    quantity: i64,
    expiry_date: NaiveDate,
) -> NewProduct {
    NewProduct {
        barcode: Some(barcode_for(name)),
        name: name.to_string(),
        unit: Some(unit.to_string()),
        kind: Some(kind.to_string()),
        manufacturer: Some(manufacturer.to_string()),
        purchase_price: Some(purchase_price),
        sale_price: Some(sale_price),
        quantity: Some(quantity),
        min_stock: None,
        expiry_date: Some(expiry_date),
    }
}

/// Derives a stable pseudo-EAN barcode from the product name.
fn barcode_for(name: &str) -> String {
    let hash: u64 = name.bytes().fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));
    format!("629{:010}", hash % 10_000_000_000)
}

/// Parses `--db <path>` from the command line.
fn parse_db_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|a| a == "--db")
        .and_then(|i| args.get(i + 1))
        .cloned()
}
