use std::sync::Arc;

use crate::post::application::ports::incoming::use_cases::{
    CreateCommentUseCase, CreatePostUseCase, DeleteCommentUseCase, DeletePostUseCase,
    GetPostUseCase, ListAccountPostsUseCase, ListCommentsUseCase, ListPostsUseCase,
    UpdatePostUseCase,
};

#[derive(Clone)]
pub struct PostUseCases {
    pub create: Arc<dyn CreatePostUseCase + Send + Sync>,
    pub list: Arc<dyn ListPostsUseCase + Send + Sync>,
    pub get: Arc<dyn GetPostUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePostUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePostUseCase + Send + Sync>,
    pub list_by_account: Arc<dyn ListAccountPostsUseCase + Send + Sync>,
    pub create_comment: Arc<dyn CreateCommentUseCase + Send + Sync>,
    pub list_comments: Arc<dyn ListCommentsUseCase + Send + Sync>,
    pub delete_comment: Arc<dyn DeleteCommentUseCase + Send + Sync>,
}
