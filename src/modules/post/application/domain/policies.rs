use crate::account::application::domain::entities::UserId;
use crate::post::application::domain::entities::{Comment, Post};
use crate::shared::permissions::{allow_if, Denial, Permission};

pub const NOT_POST_OWNER: Denial = Denial {
    code: "NOT_POST_OWNER",
    message: "Only the post owner can perform this action.",
};

pub const NOT_COMMENT_OWNER: Denial = Denial {
    code: "NOT_COMMENT_OWNER",
    message: "Only the comment owner can perform this action.",
};

pub fn is_post_owner(requester: UserId, post: &Post) -> Permission {
    allow_if(post.user_id == requester, NOT_POST_OWNER)
}

pub fn is_comment_owner(requester: UserId, comment: &Comment) -> Permission {
    allow_if(comment.user_id == requester, NOT_COMMENT_OWNER)
}
