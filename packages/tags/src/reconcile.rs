// ABOUTME: Tag name reconciliation
// ABOUTME: Maps tag names to ids inside an open scope, creating the names that are missing

use std::collections::HashSet;

use tracing::debug;

use crate::color::{ColorGenerator, ColorOptions};
use crate::error::Result;
use crate::store::TagScope;
use crate::types::{NewTag, TagId};

/// Resolve `names` to tag ids, inserting any name the scope does not know yet.
///
/// Returns the ids of tags that already existed followed by the ids of the
/// tags created here. Each missing name gets its own light color from
/// `generator`. Repeated names are created once.
///
/// The caller owns the transaction: on error nothing here has been committed
/// and the scope should be rolled back.
pub async fn reconcile_tags<S, G>(
    scope: &mut S,
    names: &[String],
    generator: &G,
) -> Result<Vec<TagId>>
where
    S: TagScope + ?Sized,
    G: ColorGenerator + ?Sized,
{
    let existing = scope.find_by_names(names).await?;

    let existing_names: HashSet<&str> = existing.iter().map(|tag| tag.name.as_str()).collect();
    let mut tag_ids: Vec<TagId> = existing.iter().map(|tag| tag.id).collect();

    let mut seen = HashSet::new();
    let missing: Vec<&String> = names
        .iter()
        .filter(|name| !existing_names.contains(name.as_str()))
        .filter(|name| seen.insert(name.as_str()))
        .collect();

    if missing.is_empty() {
        debug!("All {} tag(s) already exist", tag_ids.len());
        return Ok(tag_ids);
    }

    let options = ColorOptions::light();
    let new_tags = missing
        .into_iter()
        .map(|name| -> Result<NewTag> {
            Ok(NewTag {
                name: name.clone(),
                color: generator.generate(&options)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let created = scope.insert_many(&new_tags).await?;
    debug!(
        "Found {} existing tag(s), created {} of {} missing",
        tag_ids.len(),
        created,
        new_tags.len()
    );

    if created > 0 {
        let created_ids = scope.find_ids_by_names_excluding(names, &tag_ids).await?;
        tag_ids.extend(created_ids);
    }

    Ok(tag_ids)
}
