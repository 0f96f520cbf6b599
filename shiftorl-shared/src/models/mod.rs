/// Database models
///
/// Each model owns the SQL for its table.
///
/// - `contact_inquiry`: contact form rows (`client_inquiries`)
/// - `subscription`: newsletter sign-ups (`email_subscriptions`)
/// - `blog_post`: published blog content (`blog_posts`)
///
/// # Example
///
/// ```no_run
/// use shiftorl_shared::models::contact_inquiry::{ContactInquiry, CreateContactInquiry};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let inquiry = ContactInquiry::create(
///     &pool,
///     CreateContactInquiry {
///         name: "Jane Doe".to_string(),
///         email: "jane@example.com".to_string(),
///         message: "Hello".to_string(),
///     },
/// )
/// .await?;
/// println!("Stored inquiry {}", inquiry.id);
/// # Ok(())
/// # }
/// ```

pub mod blog_post;
pub mod contact_inquiry;
pub mod subscription;
