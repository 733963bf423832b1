//! Applies flow intents to the presenter and scheduler.

use crate::{intents::UiIntent, presenter::Presenter, scheduler::Scheduler};

pub fn dispatch_intent<P, S>(presenter: &mut P, scheduler: &mut S, intent: UiIntent)
where
    P: Presenter + ?Sized,
    S: Scheduler + ?Sized,
{
    tracing::trace!(intent = intent.name(), "dispatching ui intent");

    match intent {
        UiIntent::SetSectionVisible { section, visible } => {
            presenter.set_section_visible(section, visible)
        }
        UiIntent::ShowError { banner, message } => presenter.show_error(banner, &message),
        UiIntent::HideError(banner) => presenter.hide_error(banner),
        UiIntent::SetPasswordStrength(strength) => presenter.set_password_strength(strength),
        UiIntent::SetPasswordMatch(state) => presenter.set_password_match(state),
        UiIntent::SetFileLabel(label) => presenter.set_file_label(label.as_deref()),
        UiIntent::SetUploadControl(control) => presenter.set_upload_control(&control),
        UiIntent::AppendNotice(notice) => presenter.append_notice(&notice),
        UiIntent::RenderResults(summary) => presenter.render_results(&summary),
        UiIntent::RestoreUploadPanel => presenter.restore_upload_panel(),
        UiIntent::ClearForm(panel) => presenter.clear_form(panel),
        UiIntent::ClearInputs => presenter.clear_inputs(),
        UiIntent::Notify(message) => presenter.notify(&message),
        UiIntent::Schedule { delay, timer } => scheduler.schedule(delay, timer),
    }
}

pub fn dispatch_intents<P, S>(presenter: &mut P, scheduler: &mut S, intents: Vec<UiIntent>)
where
    P: Presenter + ?Sized,
    S: Scheduler + ?Sized,
{
    for intent in intents {
        dispatch_intent(presenter, scheduler, intent);
    }
}
