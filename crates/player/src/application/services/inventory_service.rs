//! Inventory Service - Application service for the inventory lists
//!
//! Each category has an input and a list. Categories backed by a lookup table
//! resolve the typed name against the backend and append the canonical name;
//! misc items are appended as typed.

use std::sync::Arc;

use charsheet_domain::InventoryCategory;
use charsheet_shared::{decode_item_name, LookupRequest, Resource, ResourceKey};
use futures_util::future::{self, BoxFuture, FutureExt};

use super::{FieldReader, ListAppender, RemoteLookup};
use crate::application::SubmitOutcome;
use crate::ports::outbound::bindings::{self, InventoryBinding};
use crate::ports::outbound::{LookupError, PagePort};

pub const INVALID_ITEM: &str = "Enter valid item.";

#[derive(Clone)]
pub struct InventoryService {
    page: Arc<dyn PagePort>,
    fields: FieldReader,
    lists: ListAppender,
    lookup: RemoteLookup,
}

impl InventoryService {
    /// Create a new InventoryService on top of a page and a shared lookup
    pub fn new(page: Arc<dyn PagePort>, lookup: RemoteLookup) -> Self {
        Self {
            fields: FieldReader::new(Arc::clone(&page)),
            lists: ListAppender::new(Arc::clone(&page)),
            page,
            lookup,
        }
    }

    /// Add the typed item to its category list
    pub async fn add_item(&self, category: InventoryCategory) -> SubmitOutcome {
        self.submit_item(category).await
    }

    /// Read, validate and claim now; the returned future finishes the add.
    ///
    /// The field is cleared only once the lookup is accepted, so a busy
    /// rejection leaves the typed text in place.
    pub fn submit_item(&self, category: InventoryCategory) -> BoxFuture<'static, SubmitOutcome> {
        let binding = bindings::inventory(category);
        let Ok(typed) = self.fields.read(binding.input).into_valid() else {
            self.page.alert(INVALID_ITEM);
            return future::ready(SubmitOutcome::Rejected).boxed();
        };

        let Some(resource) = Resource::for_inventory(category) else {
            self.fields.clear(binding.input);
            self.lists.append_row(binding.list, typed.clone());
            tracing::info!(category = %category, item = %typed, "Item added");
            return future::ready(SubmitOutcome::Appended(vec![typed])).boxed();
        };

        let pending = match self.lookup.claim(
            ResourceKey::of(resource),
            LookupRequest::by_name(resource, &typed),
        ) {
            Ok(pending) => pending,
            Err(e) => {
                tracing::debug!(item = %typed, error = %e, "Item lookup rejected, key busy");
                self.page.alert(&format!(
                    "Still looking up the previous {} item.",
                    resource_label(resource)
                ));
                return future::ready(SubmitOutcome::Rejected).boxed();
            }
        };
        self.fields.clear(binding.input);

        let service = self.clone();
        async move {
            let result = pending
                .await
                .and_then(|body| decode_item_name(resource, &body).map_err(LookupError::from));
            service.settle(binding, resource, typed, result)
        }
        .boxed()
    }

    fn settle(
        &self,
        binding: InventoryBinding,
        resource: Resource,
        typed: String,
        result: Result<Option<String>, LookupError>,
    ) -> SubmitOutcome {
        match result {
            Ok(found) => {
                let name = found.unwrap_or_else(|| {
                    tracing::debug!(resource = %resource, item = %typed, "No match, keeping typed name");
                    typed.clone()
                });
                self.lists.append_row(binding.list, name.clone());
                tracing::info!(resource = %resource, item = %name, "Item added");
                SubmitOutcome::Appended(vec![name])
            }
            Err(e) => {
                tracing::warn!(resource = %resource, item = %typed, error = %e, "Item lookup failed");
                self.page
                    .alert(&format!("Could not look up '{}': {}", typed, e));
                self.lists.append_row(binding.list, typed);
                SubmitOutcome::Placeholder(e)
            }
        }
    }
}

fn resource_label(resource: Resource) -> &'static str {
    InventoryCategory::ALL
        .into_iter()
        .find(|c| Resource::for_inventory(*c) == Some(resource))
        .map(InventoryCategory::label)
        .unwrap_or("inventory")
}
