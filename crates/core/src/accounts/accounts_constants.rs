/// Provider account categories
pub mod account_categories {
    pub const DEPOSITORY: &str = "depository";
    pub const CREDIT: &str = "credit";
    pub const LOAN: &str = "loan";
    pub const INVESTMENT: &str = "investment";
}

/// Subcategories that mark an account as an investment vehicle even when the
/// provider reports a different top-level category.
pub const INVESTMENT_SUBCATEGORIES: [&str; 3] = ["401k", "ira", "brokerage"];
