use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Balance deltas must be strictly greater than this to be recorded.
pub const MATERIAL_CHANGE_THRESHOLD: Decimal = dec!(0.01);

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Institution label used when the provider returned no display name
pub const UNKNOWN_INSTITUTION_NAME: &str = "Unknown Bank";

/// Institution label for sample changes in a test notification
pub const TEST_NOTIFICATION_INSTITUTION_NAME: &str = "Test Bank";

/// Number of accounts used to build the sample payload of a test notification
pub const TEST_NOTIFICATION_SAMPLE_SIZE: usize = 3;

/// Synthetic delta applied to each sample account of a test notification
pub const TEST_NOTIFICATION_SAMPLE_DELTA: Decimal = dec!(50);

/// Default bound on a single aggregation provider call, in milliseconds
pub const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 30_000;

/// Reported when the notification transport fails its connectivity check
pub const EMAIL_CONNECTION_FAILED_MESSAGE: &str =
    "Email server connection failed. Check your email settings.";
