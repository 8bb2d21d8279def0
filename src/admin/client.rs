use std::path::Path;
use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response, multipart};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::error::{AdminError, Result, error_for_status};
use crate::models::{
    BlogDraft, BlogPost, NewTestimonial, Testimonial, sort_newest_first,
    sort_testimonials_newest_first,
};

const TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct LoginResponse {
    token: Option<String>,
    message: Option<String>,
}

#[derive(Deserialize)]
struct MessageResponse {
    message: Option<String>,
}

#[derive(Deserialize)]
struct UploadResponse {
    filename: String,
}

/// Blocking client for the blog backend's admin API.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: Client,
    base: String,
    token: Option<String>,
}

impl AdminClient {
    pub fn new(base: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(TIMEOUT)
            .user_agent(concat!("safari-blog/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base: base.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: Option<impl Into<String>>) -> Self {
        self.token = token.map(Into::into);
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Start a request. Authenticated requests fail here, before anything is
    /// sent, when there is no token.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        authenticated: bool,
    ) -> Result<RequestBuilder> {
        let builder = self.http.request(method, self.url(path));
        if !authenticated {
            return Ok(builder);
        }
        let token = self.token.as_deref().ok_or(AdminError::NotLoggedIn)?;
        Ok(builder.bearer_auth(token))
    }

    fn send(&self, builder: RequestBuilder, authenticated: bool, fallback: &str) -> Result<Response> {
        let response = builder.send()?;
        let status = response.status();
        log::debug!("{} {}", status.as_u16(), response.url());

        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(error_for_status(status.as_u16(), &body, authenticated, fallback))
    }

    fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let text = response.text()?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Exchange credentials for a bearer token.
    pub fn login(&self, username: &str, password: &str) -> Result<String> {
        let builder = self
            .request(Method::POST, "/api/admin/login", false)?
            .json(&json!({ "username": username, "password": password }));
        let response = self.send(builder, false, "Login failed")?;
        let body: LoginResponse = Self::decode(response)?;

        body.token.ok_or_else(|| {
            AdminError::Invalid(body.message.unwrap_or_else(|| "Login failed".to_string()))
        })
    }

    /// Returns the server's confirmation message.
    pub fn change_password(&self, old_password: &str, new_password: &str) -> Result<String> {
        let builder = self
            .request(Method::POST, "/api/admin/change-password", true)?
            .json(&json!({ "oldPassword": old_password, "newPassword": new_password }));
        let response = self.send(builder, true, "Failed to change password")?;
        let body: MessageResponse = Self::decode(response)?;
        Ok(body
            .message
            .unwrap_or_else(|| "Password changed successfully".to_string()))
    }

    /// All posts, newest first.
    pub fn list_blogs(&self) -> Result<Vec<BlogPost>> {
        let builder = self.request(Method::GET, "/api/blogs", false)?;
        let response = self.send(builder, false, "Failed to fetch blogs")?;
        let mut posts: Vec<BlogPost> = Self::decode(response)?;
        sort_newest_first(&mut posts);
        Ok(posts)
    }

    pub fn get_blog(&self, id: i64) -> Result<BlogPost> {
        let builder = self.request(Method::GET, &format!("/api/blogs/{id}"), false)?;
        let response = self.send(builder, false, "Blog not found")?;
        Self::decode(response)
    }

    pub fn create_blog(&self, draft: &BlogDraft) -> Result<()> {
        draft.validate().map_err(AdminError::Invalid)?;
        let builder = self
            .request(Method::POST, "/api/blogs", true)?
            .multipart(blog_form(draft)?);
        self.send(builder, true, "Failed to create blog")?;
        log::info!("Created blog '{}'", draft.title);
        Ok(())
    }

    pub fn update_blog(&self, id: i64, draft: &BlogDraft) -> Result<()> {
        draft.validate().map_err(AdminError::Invalid)?;
        let builder = self
            .request(Method::PUT, &format!("/api/blogs/{id}"), true)?
            .multipart(blog_form(draft)?);
        self.send(builder, true, "Failed to update blog")?;
        log::info!("Updated blog {id}");
        Ok(())
    }

    pub fn delete_blog(&self, id: i64) -> Result<()> {
        let builder = self.request(Method::DELETE, &format!("/api/blogs/{id}"), true)?;
        self.send(builder, true, "Failed to delete blog")?;
        log::info!("Deleted blog {id}");
        Ok(())
    }

    /// Upload a content image and return the stored file name.
    pub fn upload_image(&self, path: &Path) -> Result<String> {
        let form = multipart::Form::new()
            .file("image", path)
            .map_err(|source| AdminError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;
        let builder = self
            .request(Method::POST, "/api/blogs/upload-image", true)?
            .multipart(form);
        let response = self.send(builder, true, "Upload failed")?;
        let body: UploadResponse = Self::decode(response)?;
        log::info!("Uploaded {} as {}", path.display(), body.filename);
        Ok(body.filename)
    }

    /// All testimonials, newest first.
    pub fn list_testimonials(&self) -> Result<Vec<Testimonial>> {
        let builder = self.request(Method::GET, "/api/testimonials", false)?;
        let response = self.send(builder, false, "Failed to fetch testimonials")?;
        let mut testimonials: Vec<Testimonial> = Self::decode(response)?;
        sort_testimonials_newest_first(&mut testimonials);
        Ok(testimonials)
    }

    pub fn add_testimonial(&self, testimonial: &NewTestimonial) -> Result<()> {
        testimonial.validate().map_err(AdminError::Invalid)?;
        let builder = self
            .request(Method::POST, "/api/testimonials", true)?
            .json(testimonial);
        self.send(builder, true, "Failed to add testimonial")?;
        Ok(())
    }

    pub fn delete_testimonial(&self, id: i64) -> Result<()> {
        let builder = self.request(Method::DELETE, &format!("/api/testimonials/{id}"), true)?;
        self.send(builder, true, "Failed to delete testimonial")?;
        Ok(())
    }
}

/// `content_images` travels as a JSON array inside a text field.
fn content_images_field(draft: &BlogDraft) -> Result<String> {
    Ok(serde_json::to_string(&draft.content_images)?)
}

fn blog_form(draft: &BlogDraft) -> Result<multipart::Form> {
    let mut form = multipart::Form::new()
        .text("title", draft.title.clone())
        .text("content", draft.content.clone())
        .text("content_images", content_images_field(draft)?);

    if let Some(cover) = &draft.cover_image {
        form = form
            .file("cover_image", cover)
            .map_err(|source| AdminError::ReadFile {
                path: cover.clone(),
                source,
            })?;
    }

    Ok(form)
}
