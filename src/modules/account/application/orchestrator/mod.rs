pub mod account_registration;

pub use account_registration::AccountRegistrationOrchestrator;
