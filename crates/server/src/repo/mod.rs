pub mod complaint;
pub mod court_referral;
pub mod user;
