//! Create/update/delete helpers shared by the resource pages.
//!
//! Every write is followed by a full refetch through the page's loader;
//! nothing is merged into the local list.

use contracts::domain::common::Resource;
use serde::Serialize;

use crate::shared::dialogs::confirm_delete;
use crate::shared::page_load::run_action;
use crate::system::auth::AuthContext;

/// Create when `id` is `None`, update otherwise.
pub fn save_resource<R, D>(auth: AuthContext, id: Option<R::Id>, payload: D, on_saved: impl FnOnce() + 'static)
where
    R: Resource,
    D: Serialize + 'static,
{
    run_action(
        auth,
        move |client| async move {
            match id {
                Some(id) => client.update::<R, D>(&id, &payload).await,
                None => client.create::<R, D>(&payload).await,
            }
        },
        move |_| on_saved(),
    );
}

/// Ask for confirmation, then delete.
pub fn delete_resource<R: Resource>(auth: AuthContext, id: R::Id, on_deleted: impl FnOnce() + 'static) {
    if !confirm_delete(R::element_name()) {
        return;
    }
    run_action(
        auth,
        move |client| async move { client.remove::<R>(&id).await },
        move |_| on_deleted(),
    );
}
