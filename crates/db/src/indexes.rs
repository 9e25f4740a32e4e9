use mongodb::{Database, IndexModel, options::IndexOptions};
use tracing::info;

use crate::models::{Invitation, InvitationContent, PreviewToken};

pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    // Invitations. `public_id` uniqueness is checked by the id generator
    // before assignment, so the index only serves the lookup.
    create_indexes(
        db,
        Invitation::COLLECTION,
        vec![
            index(bson::doc! { "user_id": 1, "created_at": -1 }),
            index(bson::doc! { "public_id": 1, "status": 1 }),
        ],
    )
    .await?;

    // Content versions, read as "latest row per lineage".
    create_indexes(
        db,
        InvitationContent::COLLECTION,
        vec![index(
            bson::doc! { "invitation_id": 1, "is_published_snapshot": 1, "version": -1 },
        )],
    )
    .await?;

    // Preview tokens
    create_indexes(
        db,
        PreviewToken::COLLECTION,
        vec![
            index_unique(bson::doc! { "token": 1 }),
            index(bson::doc! { "invitation_id": 1 }),
        ],
    )
    .await?;

    info!("All indexes ensured");
    Ok(())
}

fn index(keys: bson::Document) -> IndexModel {
    IndexModel::builder().keys(keys).build()
}

fn index_unique(keys: bson::Document) -> IndexModel {
    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().unique(true).build())
        .build()
}

async fn create_indexes(
    db: &Database,
    collection: &str,
    indexes: Vec<IndexModel>,
) -> Result<(), mongodb::error::Error> {
    db.collection::<bson::Document>(collection)
        .create_indexes(indexes)
        .await?;
    info!(collection, "Indexes created");
    Ok(())
}
