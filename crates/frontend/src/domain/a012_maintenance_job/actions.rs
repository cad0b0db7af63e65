//! Start/Finish status transitions shared by the job list and the technician portal.

use contracts::domain::a012_maintenance_job::aggregate::{
    JobAction, MaintenanceJob, Transition, RESTART_CONFIRM_MESSAGE,
};
use leptos::prelude::*;

use crate::shared::date_utils::now_iso;
use crate::shared::dialogs::confirm;
use crate::shared::icons::icon;
use crate::shared::page_load::run_action;
use crate::system::auth::AuthContext;

/// Stamp `job` for `action` and PUT the full record back. Restarting a
/// finished job asks first.
pub fn apply_job_action(auth: AuthContext, job: &MaintenanceJob, action: JobAction, on_done: impl FnOnce() + 'static) {
    let now = now_iso();
    let transition = match job.transition(action, &now, false) {
        Transition::ConfirmRestart => {
            if !confirm(RESTART_CONFIRM_MESSAGE) {
                return;
            }
            job.transition(action, &now, true)
        }
        applied => applied,
    };
    let Transition::Apply(updated) = transition else {
        return;
    };
    log::info!("job {} -> {}", updated.id, action.label());
    run_action(
        auth,
        move |client| async move { client.update::<MaintenanceJob, _>(&updated.id, &updated).await },
        move |_| on_done(),
    );
}

/// Buttons for the actions the job's current status allows.
#[component]
pub fn JobActionButtons(auth: AuthContext, job: MaintenanceJob, on_done: Callback<()>) -> impl IntoView {
    job.available_actions()
        .iter()
        .map(|action| {
            let action = *action;
            let job = job.clone();
            let icon_name = match action {
                JobAction::Start => "play",
                JobAction::Finish => "flag",
            };
            view! {
                <button
                    class="button button--small button--secondary"
                    title=action.label()
                    on:click=move |_| apply_job_action(auth, &job, action, move || on_done.run(()))
                >
                    {icon(icon_name)}
                    {action.label()}
                </button>
            }
        })
        .collect_view()
}
