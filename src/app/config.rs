use crate::app::models::CollectConfig;
use std::path::PathBuf;

pub const OUTPUT_FILE_NAME: &str = "stripe_migration_report.txt";

const PROJECT_ROOT: &str = "/home/hanos/cb/backend";

/// The backend files involved in the Stripe migration, in report order.
const FILES_TO_COLLECT: &[&str] = &[
    ".env",
    "package.json",
    "server.js",
    "controllers/auth.js",
    "controllers/cards.js",
    "controllers/payments.js",
    "controllers/subscriptions.js",
    "controllers/users.js",
    "lib/prismaClient.js",
    "middleware/requireAuth.js",
    "prisma/schema.prisma",
];

/// Builds the fixed manifest as an explicit value. Nothing else in the crate
/// reads these literals directly.
pub fn stripe_migration_config() -> CollectConfig {
    CollectConfig {
        root: PathBuf::from(PROJECT_ROOT),
        output_name: OUTPUT_FILE_NAME.to_string(),
        files: FILES_TO_COLLECT.iter().map(|s| s.to_string()).collect(),
    }
}
