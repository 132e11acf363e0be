use tracing::{debug, info};

use eventdesk_core::{DomainError, DomainResult, Entity, ExpectedRevision, InventoryItemId};
use eventdesk_inventory::{InventoryItem, InventoryPatch, NewInventoryItem};

use super::ServiceContext;

#[derive(Debug, Clone)]
pub struct InventoryService {
    ctx: ServiceContext,
}

impl InventoryService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn list(&self) -> DomainResult<Vec<InventoryItem>> {
        self.ctx
            .run("inventory.list", self.ctx.profile().inventory_list, |store, _| {
                Ok(store.inventory.list())
            })
            .await
    }

    /// Merge `patch` into the item, stamping today's date and re-deriving
    /// its stock status.
    pub async fn update(&self, id: &InventoryItemId, patch: InventoryPatch) -> DomainResult<InventoryItem> {
        patch.validate()?;
        let id = id.clone();
        self.ctx
            .run("inventory.update", self.ctx.profile().inventory_update, move |store, clock| {
                let today = clock.today();
                let updated = store.inventory.update(&id, ExpectedRevision::Any, |item| {
                    patch.apply_to(item, today);
                    Ok(())
                })?;
                debug!(
                    item_id = %id,
                    quantity = updated.value.quantity,
                    status = updated.value.status.as_str(),
                    "inventory item updated"
                );
                Ok(updated.value)
            })
            .await
    }

    pub async fn add(&self, new: NewInventoryItem) -> DomainResult<InventoryItem> {
        new.validate()?;
        self.ctx
            .run("inventory.add", self.ctx.profile().inventory_add, move |store, clock| {
                let item = InventoryItem::from_new(InventoryItemId::generate(), new, clock.today());
                let item = store.inventory.insert(item)?;
                info!(item_id = %item.id, name = %item.name, "inventory item added");
                Ok(item)
            })
            .await
    }

    pub async fn remove(&self, id: &InventoryItemId) -> DomainResult<()> {
        let id = id.clone();
        self.ctx
            .run("inventory.remove", self.ctx.profile().inventory_remove, move |store, _| {
                let removed = store
                    .inventory
                    .remove(&id)
                    .ok_or_else(|| DomainError::not_found(InventoryItem::KIND, &id))?;
                info!(item_id = %id, name = %removed.name, "inventory item removed");
                Ok(())
            })
            .await
    }
}
