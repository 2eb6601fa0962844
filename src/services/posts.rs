use uuid::Uuid;

use crate::{
    media::MediaUploader,
    models::posts::Post,
    repositories::{posts_repo::PostsRepository, user_repo::UserRepository},
    Error, Result,
};

/// Orchestrates post creation: input validation, author lookup, the
/// conditional media upload, and the durable write, in that order.
/// Collaborators are injected so the workflow owns no global client state.
#[derive(Clone)]
pub struct PostsService<R, M> {
    repo: R,
    uploader: M,
}

impl<R, M> PostsService<R, M>
where
    R: PostsRepository + UserRepository,
    M: MediaUploader,
{
    pub fn new(repo: R, uploader: M) -> Self {
        Self { repo, uploader }
    }

    pub async fn create_post(
        &self,
        author_id: Uuid,
        text: Option<&str>,
        image: Option<&str>,
    ) -> Result<Post> {
        // Empty strings count as absent, mirroring the request body where a
        // missing field and "" are both "no content". Text is otherwise
        // stored exactly as sent, untrimmed.
        let text = text.filter(|t| !t.is_empty());
        let image = image.filter(|i| !i.is_empty());

        // Rejected before any collaborator is contacted.
        if text.is_none() && image.is_none() {
            return Err(Error::BadRequest("Text or image is required".to_string()));
        }

        self.repo
            .find_user(author_id)
            .await?
            .ok_or(Error::NotFound)?;

        // The upload must complete before the insert is attempted, so a
        // stored post can never reference an unfinished upload. A failed
        // upload aborts the whole operation; an already-uploaded asset
        // stays on the media host unreferenced.
        let image = match image {
            Some(payload) => Some(self.uploader.upload(payload).await?),
            None => None,
        };

        let post = self
            .repo
            .create_post(author_id, text.map(str::to_string), image)
            .await?;

        Ok(post)
    }

    pub async fn get_posts(&self) -> Result<Vec<Post>> {
        let posts = self.repo.get_posts().await?;
        Ok(posts)
    }
}
