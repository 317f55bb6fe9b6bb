use crate::account::application::domain::entities::{Account, UserId};
use crate::shared::permissions::{allow_if, Denial, Permission};

pub const NOT_ACCOUNT_OWNER: Denial = Denial {
    code: "NOT_ACCOUNT_OWNER",
    message: "Only account owner can perform this action.",
};

pub const ACCOUNT_NOT_CONFIRMED: Denial = Denial {
    code: "ACCOUNT_NOT_CONFIRMED",
    message: "The email for this account has not yet been confirmed.",
};

pub fn is_owner_account(requester: UserId, account: &Account) -> Permission {
    allow_if(account.id == requester, NOT_ACCOUNT_OWNER)
}

pub fn is_confirmed_account(account: &Account) -> Permission {
    allow_if(account.is_confirmed, ACCOUNT_NOT_CONFIRMED)
}
