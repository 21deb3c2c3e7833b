// src/admin_cli.rs
use crate::core::database::{Database, JobRepository, NewJob};
use anyhow::Result;
use chrono::{Duration, Utc};
use clap::{Args, Subcommand};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Args)]
pub struct AdminCli {
    #[command(subcommand)]
    pub command: AdminCommand,

    #[arg(long, default_value = "rozgar.db")]
    pub database_path: PathBuf,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Insert the built-in sample postings
    Seed,
    /// Import postings from a CSV file
    /// (title,job_type,category,city,state,salary_min,salary_max,period,employer)
    Import { csv_file: PathBuf },
    /// List all active postings
    List,
    /// Count active postings
    Count,
    /// Close a posting by id
    Deactivate { id: String },
}

#[allow(clippy::too_many_arguments)]
fn posting(
    title: &str,
    job_type: &str,
    category: &str,
    city: &str,
    state: &str,
    salary_min: i64,
    salary_max: i64,
    employer: &str,
    is_urgent: bool,
    is_verified: bool,
) -> NewJob {
    NewJob {
        title: title.to_string(),
        job_type: job_type.to_string(),
        category: category.to_string(),
        location_city: Some(city.to_string()),
        location_state: Some(state.to_string()),
        salary_min,
        salary_max,
        salary_period: Some("month".to_string()),
        employer_display_name: Some(employer.to_string()),
        description: None,
        is_urgent,
        is_verified,
    }
}

fn seed_postings() -> Vec<NewJob> {
    vec![
        posting(
            "Electrician - Construction Site",
            "Full-time",
            "Electrical",
            "Mumbai",
            "Maharashtra",
            25000,
            35000,
            "BrightBuild Construction",
            true,
            true,
        ),
        posting(
            "Plumber Assistant",
            "Part-time",
            "Plumbing",
            "Pune",
            "Maharashtra",
            15000,
            20000,
            "HomeFixers Ltd.",
            false,
            true,
        ),
        posting(
            "Delivery Driver",
            "Full-time",
            "Driving",
            "Bengaluru",
            "Karnataka",
            18000,
            25000,
            "QuickServe Logistics",
            true,
            false,
        ),
        posting(
            "Security Guard - Night Shift",
            "Full-time",
            "Security",
            "Delhi",
            "Delhi",
            16000,
            22000,
            "SafeZone Security Services",
            false,
            true,
        ),
        posting(
            "Carpenter for Custom Furniture",
            "Contract",
            "Carpentry",
            "Hyderabad",
            "Telangana",
            30000,
            40000,
            "WoodArt Furnishings",
            false,
            true,
        ),
        posting(
            "Cook for Corporate Cafeteria",
            "Full-time",
            "Cooking",
            "Chennai",
            "Tamil Nadu",
            22000,
            28000,
            "TasteBuds Food Services",
            true,
            true,
        ),
        posting(
            "House Cleaning Staff",
            "Part-time",
            "Housekeeping",
            "Lucknow",
            "Uttar Pradesh",
            12000,
            15000,
            "CleanHome Services",
            false,
            true,
        ),
        posting(
            "Tailor for Fashion Studio",
            "Full-time",
            "Tailoring",
            "Jaipur",
            "Rajasthan",
            14000,
            18000,
            "TrendSetters Fashion",
            false,
            false,
        ),
    ]
}

pub async fn handle_admin_command(cli: AdminCli) -> Result<()> {
    let db = Database::new(&cli.database_path).await?;
    let jobs = JobRepository::new(db.pool());

    match cli.command {
        AdminCommand::Seed => {
            let postings = seed_postings();
            let now = Utc::now();
            let mut created = 0;

            // stagger creation times so the listings page shows a spread
            // of posted dates
            for (i, posting) in postings.into_iter().enumerate() {
                let created_at = now - Duration::days(i as i64);
                match jobs.insert(posting, created_at).await {
                    Ok(row) => {
                        created += 1;
                        info!("✅ Seeded: {} ({})", row.title, row.id);
                    }
                    Err(e) => {
                        error!("Failed to seed posting: {}", e);
                    }
                }
            }

            info!("Seeding completed: {} posting(s) created", created);
        }

        AdminCommand::Import { csv_file } => {
            if !csv_file.exists() {
                warn!("❌ CSV file not found: {}", csv_file.display());
                return Ok(());
            }

            let content = tokio::fs::read_to_string(&csv_file).await?;
            let mut reader = csv::Reader::from_reader(content.as_bytes());

            let mut success_count = 0;
            let mut error_count = 0;
            let now = Utc::now();

            for result in reader.records() {
                match result {
                    Ok(record) => {
                        if record.len() < 9 {
                            error_count += 1;
                            warn!("⚠️  Skipping invalid record (need 9 fields)");
                            continue;
                        }

                        let title = record.get(0).unwrap_or("").trim().to_string();
                        let salary_min = record.get(5).unwrap_or("").trim().parse::<i64>();
                        let salary_max = record.get(6).unwrap_or("").trim().parse::<i64>();

                        let (salary_min, salary_max) = match (salary_min, salary_max) {
                            (Ok(min), Ok(max)) if !title.is_empty() => (min, max),
                            _ => {
                                error_count += 1;
                                warn!("⚠️  Skipping record with bad title or salary");
                                continue;
                            }
                        };

                        let new_job = NewJob {
                            title: title.clone(),
                            job_type: record.get(1).unwrap_or("Full-time").trim().to_string(),
                            category: record.get(2).unwrap_or("").trim().to_string(),
                            location_city: record.get(3).map(|s| s.trim().to_string()),
                            location_state: record.get(4).map(|s| s.trim().to_string()),
                            salary_min,
                            salary_max,
                            salary_period: record.get(7).map(|s| s.trim().to_string()),
                            employer_display_name: record.get(8).map(|s| s.trim().to_string()),
                            description: None,
                            is_urgent: false,
                            is_verified: false,
                        };

                        match jobs.insert(new_job, now).await {
                            Ok(row) => {
                                success_count += 1;
                                info!("✅ Added: {} ({})", row.title, row.id);
                            }
                            Err(e) => {
                                error_count += 1;
                                warn!("❌ Failed to add {}: {}", title, e);
                            }
                        }
                    }
                    Err(e) => {
                        error_count += 1;
                        warn!("❌ CSV parsing error: {}", e);
                    }
                }
            }

            info!("Import completed:");
            info!("  ✅ Success: {}", success_count);
            info!("  ❌ Errors:  {}", error_count);
        }

        AdminCommand::List => {
            let rows = jobs.fetch_active_page(0, 500).await?;
            if rows.is_empty() {
                info!("No active postings found.");
            } else {
                info!("Active postings:");
                info!(
                    "{:<38} {:<35} {:<15} {:<20}",
                    "ID", "Title", "Category", "Created"
                );
                info!("{}", "-".repeat(110));
                for row in rows {
                    info!(
                        "{:<38} {:<35} {:<15} {:<20}",
                        row.id,
                        row.title,
                        row.category,
                        row.created_at.format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }

        AdminCommand::Count => {
            let count = jobs.count_active().await?;
            info!("{} active posting(s)", count);
        }

        AdminCommand::Deactivate { id } => match jobs.deactivate(&id).await {
            Ok(true) => {
                info!("✅ Posting closed: {}", id);
            }
            Ok(false) => {
                warn!("❌ No active posting found with id: {}", id);
            }
            Err(e) => {
                error!("Failed to deactivate posting: {}", e);
            }
        },
    }

    Ok(())
}
