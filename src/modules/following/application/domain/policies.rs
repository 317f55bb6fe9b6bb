use crate::account::application::domain::entities::UserId;
use crate::following::application::domain::entities::Following;
use crate::shared::permissions::{allow_if, Denial, Permission};

pub const NOT_FOLLOWING_OWNER: Denial = Denial {
    code: "NOT_FOLLOWING_OWNER",
    message: "Only the user that follows can perform this action.",
};

pub fn is_following_owner(requester: UserId, following: &Following) -> Permission {
    allow_if(following.follower_id == requester, NOT_FOLLOWING_OWNER)
}
