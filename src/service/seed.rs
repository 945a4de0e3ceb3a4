// service/seed.rs
use uuid::Uuid;

use crate::{
    db::{categorydb::CategoryExt, db::DBClient},
    models::categorymodel::Category,
    service::{auth_service::AuthService, error::ServiceError},
    utils::slug::slugify,
};

/// Top-level categories with their icons and subcategory names.
const CATEGORY_TREE: &[(&str, &str, &[&str])] = &[
    (
        "Graphics & Design",
        "palette",
        &["Logo Design", "Brand Style Guides", "Illustration", "UI Design"],
    ),
    (
        "Programming & Tech",
        "code",
        &["Website Development", "Mobile Apps", "APIs & Integrations", "Bug Fixes"],
    ),
    (
        "Writing & Translation",
        "pen",
        &["Articles & Blog Posts", "Copywriting", "Translation", "Proofreading"],
    ),
    (
        "Digital Marketing",
        "megaphone",
        &["SEO", "Social Media Marketing", "Email Marketing"],
    ),
    (
        "Video & Animation",
        "film",
        &["Video Editing", "Explainer Videos", "Motion Graphics"],
    ),
    (
        "Music & Audio",
        "music",
        &["Voice Over", "Mixing & Mastering", "Podcast Editing"],
    ),
];

pub fn default_categories() -> Vec<Category> {
    let mut categories = Vec::new();

    for (name, icon, children) in CATEGORY_TREE {
        let parent = Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: slugify(name),
            parent_id: None,
            icon: Some(icon.to_string()),
            description: None,
        };
        let parent_id = parent.id;
        categories.push(parent);

        categories.extend(children.iter().map(|child| Category {
            id: Uuid::new_v4(),
            name: child.to_string(),
            slug: slugify(child),
            parent_id: Some(parent_id),
            icon: None,
            description: None,
        }));
    }

    categories
}

/// Writes the default category tree when no categories exist yet and returns
/// the stored categories.
pub async fn seed_categories(db_client: &DBClient) -> Result<Vec<Category>, ServiceError> {
    match db_client.seed_categories_if_empty(default_categories()).await? {
        0 => tracing::debug!("Categories already present, skipping seed"),
        count => tracing::info!("🌱 Seeded {} categories", count),
    }
    Ok(db_client.get_categories().await?)
}

/// Bootstrap admin credentials, taken from configuration.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub async fn seed_admin(auth_service: &AuthService, admin: &AdminSeed) -> Result<(), ServiceError> {
    let created = auth_service
        .create_admin(admin.name.clone(), &admin.email, admin.password.clone())
        .await?;
    tracing::debug!("Admin account {} ready", created.email);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::userdb::UserExt;
    use crate::models::usermodel::UserRole;
    use crate::service::testutil;

    #[tokio::test]
    async fn category_seed_runs_once() {
        let db = testutil::db();

        let first = seed_categories(&db).await.unwrap();
        let second = seed_categories(&db).await.unwrap();

        assert_eq!(first, second);
        let top_level = first.iter().filter(|c| c.is_top_level()).count();
        assert_eq!(top_level, CATEGORY_TREE.len());
        assert!(first.iter().any(|c| c.slug == "apis-integrations"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_category_seeds_write_one_tree() {
        let db = testutil::db();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let db = db.clone();
                tokio::spawn(async move { seed_categories(&db).await.map(|categories| categories.len()) })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let expected = default_categories().len();
        assert_eq!(db.get_categories().await.unwrap().len(), expected);
    }

    #[tokio::test]
    async fn admin_seed_is_idempotent() {
        let db = testutil::db();
        let auth = AuthService::new(db.clone());
        let admin = AdminSeed {
            name: "Root".to_string(),
            email: "Root@Example.com".to_string(),
            password: "change-me".to_string(),
        };

        seed_admin(&auth, &admin).await.unwrap();
        seed_admin(&auth, &admin).await.unwrap();

        let users = db.get_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].role, UserRole::Admin);
        assert_eq!(users[0].email, "root@example.com");
    }
}
