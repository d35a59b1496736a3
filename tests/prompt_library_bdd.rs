//! Behavioural tests for searching, paging, and deleting input prompts.

use std::sync::Arc;

use promptshelf::library::test_support::{StoreCall, StubPromptStore, sample_prompts};
use promptshelf::library::{
    InputPrompt, LibraryError, ListMsg, PromptListing, StatusFilter, Visibility,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

#[derive(ScenarioState, Default)]
struct LibraryState {
    store: Slot<Arc<StubPromptStore>>,
    listing: Slot<PromptListing>,
}

#[fixture]
fn library_state() -> LibraryState {
    LibraryState::default()
}

type StepResult = Result<(), Box<dyn std::error::Error>>;

fn seed(library_state: &LibraryState, store: StubPromptStore, prompts: Vec<InputPrompt>) {
    library_state.store.set(Arc::new(store));
    library_state
        .listing
        .set(PromptListing::new(prompts, Visibility::Private));
}

fn send(library_state: &LibraryState, msg: ListMsg<InputPrompt, StatusFilter>) -> StepResult {
    library_state
        .listing
        .with_mut(|listing| listing.handle_message(msg))
        .ok_or("listing should be initialised before sending messages")?;
    Ok(())
}

fn read<T>(
    library_state: &LibraryState,
    read_fn: impl FnOnce(&PromptListing) -> T,
) -> Result<T, Box<dyn std::error::Error>> {
    library_state
        .listing
        .with_ref(read_fn)
        .ok_or_else(|| "listing should be initialised before assertions".into())
}

#[given("a private prompt library with {count} prompts")]
fn given_library(library_state: &LibraryState, count: u64) {
    let prompts = sample_prompts(count);
    seed(library_state, StubPromptStore::new(prompts.clone()), prompts);
}

#[given("a private prompt library with {count} prompts where prompt {id} is public")]
fn given_library_with_public_prompt(library_state: &LibraryState, count: u64, id: u64) {
    let prompts: Vec<InputPrompt> = sample_prompts(count)
        .into_iter()
        .map(|prompt| InputPrompt {
            is_public: prompt.id == id,
            ..prompt
        })
        .collect();
    seed(library_state, StubPromptStore::new(prompts.clone()), prompts);
}

#[given("a private prompt library with {count} prompts whose deletes fail")]
fn given_library_with_failing_deletes(library_state: &LibraryState, count: u64) {
    let prompts = sample_prompts(count);
    let store = StubPromptStore::new(prompts.clone()).with_delete_error(LibraryError::DeleteFailed {
        id: 0,
        message: "status 500 Internal Server Error: unknown error".to_owned(),
    });
    seed(library_state, store, prompts);
}

#[when("the user opens page {page}")]
fn when_user_opens_page(library_state: &LibraryState, page: usize) -> StepResult {
    send(library_state, ListMsg::SetPage(page))
}

#[when("the user searches for {text}")]
fn when_user_searches(library_state: &LibraryState, text: String) -> StepResult {
    send(
        library_state,
        ListMsg::SetQuery(text.trim_matches('"').to_owned()),
    )
}

#[when("the user toggles the {status} status")]
fn when_user_toggles_status(library_state: &LibraryState, status: String) -> StepResult {
    let filter = status.trim_matches('"').parse::<StatusFilter>()?;
    send(library_state, ListMsg::ToggleCategory(filter))
}

#[when("the user asks to delete prompt {id}")]
fn when_user_requests_delete(library_state: &LibraryState, id: u64) -> StepResult {
    send(library_state, ListMsg::RequestDelete(id))
}

#[when("the user cancels the delete")]
fn when_user_cancels_delete(library_state: &LibraryState) -> StepResult {
    send(library_state, ListMsg::CancelDelete)
}

#[when("the user confirms the delete")]
fn when_user_confirms_delete(library_state: &LibraryState) -> StepResult {
    let store = library_state
        .store
        .get()
        .ok_or("store should be initialised before confirming")?;
    let runtime = tokio::runtime::Runtime::new()?;
    let confirmed = library_state
        .listing
        .with_mut(|listing| runtime.block_on(listing.confirm_delete(store.as_ref())))
        .ok_or("listing should be initialised before confirming")?;

    if !confirmed {
        return Err("expected a pending delete to confirm".into());
    }
    Ok(())
}

#[then("the current page is {page}")]
fn then_current_page(library_state: &LibraryState, page: usize) -> StepResult {
    let current = read(library_state, PromptListing::current_page)?;
    if current != page {
        return Err(format!("expected page {page}, got {current}").into());
    }
    Ok(())
}

#[then("the listing shows {count} matching prompts")]
fn then_matching_count(library_state: &LibraryState, count: usize) -> StepResult {
    let filtered = read(library_state, PromptListing::filtered_count)?;
    if filtered != count {
        return Err(format!("expected {count} matching prompts, got {filtered}").into());
    }
    Ok(())
}

#[then("the page is empty")]
fn then_page_is_empty(library_state: &LibraryState) -> StepResult {
    if !read(library_state, |listing| listing.view().is_empty)? {
        return Err("expected the page to be empty".into());
    }
    Ok(())
}

#[then("the page selector is hidden")]
fn then_page_selector_hidden(library_state: &LibraryState) -> StepResult {
    if read(library_state, |listing| listing.view().show_page_selector)? {
        return Err("expected the page selector to be hidden".into());
    }
    Ok(())
}

#[then("the visible rows are {ids}")]
fn then_visible_rows(library_state: &LibraryState, ids: String) -> StepResult {
    let expected: Vec<u64> = ids
        .trim_matches('"')
        .split(',')
        .map(|id| id.trim().parse::<u64>())
        .collect::<Result<_, _>>()?;
    let visible = read(library_state, |listing| {
        listing
            .visible_rows()
            .iter()
            .map(|prompt| prompt.id)
            .collect::<Vec<_>>()
    })?;
    if visible != expected {
        return Err(format!("expected rows {expected:?}, got {visible:?}").into());
    }
    Ok(())
}

#[then("the delete confirmation is shown")]
fn then_confirmation_shown(library_state: &LibraryState) -> StepResult {
    if !read(library_state, |listing| listing.view().is_confirming_delete())? {
        return Err("expected the delete confirmation to be shown".into());
    }
    Ok(())
}

#[then("the delete confirmation is hidden")]
fn then_confirmation_hidden(library_state: &LibraryState) -> StepResult {
    if read(library_state, |listing| listing.view().is_confirming_delete())? {
        return Err("expected the delete confirmation to be hidden".into());
    }
    Ok(())
}

#[then("the store received no delete")]
fn then_store_received_no_delete(library_state: &LibraryState) -> StepResult {
    let calls = library_state
        .store
        .with_ref(|store| store.calls())
        .ok_or("store should be initialised before assertions")?;
    if calls
        .iter()
        .any(|call| matches!(call, StoreCall::Delete(_)))
    {
        return Err(format!("expected no delete call, got {calls:?}").into());
    }
    Ok(())
}

#[then("the store was refreshed after deleting prompt {id}")]
fn then_store_refreshed_after_delete(library_state: &LibraryState, id: u64) -> StepResult {
    let calls = library_state
        .store
        .with_ref(|store| store.calls())
        .ok_or("store should be initialised before assertions")?;
    if calls != [StoreCall::Delete(id), StoreCall::Fetch] {
        return Err(format!("expected delete then fetch, got {calls:?}").into());
    }
    Ok(())
}

#[then("no notification is shown")]
fn then_no_notification(library_state: &LibraryState) -> StepResult {
    if let Some(message) = read(library_state, |listing| {
        listing.notification().map(ToString::to_string)
    })? {
        return Err(format!("expected no notification, got '{message}'").into());
    }
    Ok(())
}

#[then("the notification reads {text}")]
fn then_notification_reads(library_state: &LibraryState, text: String) -> StepResult {
    let expected = text.trim_matches('"');
    let message = read(library_state, |listing| {
        listing.notification().map(|note| note.message().to_owned())
    })?
    .ok_or("expected a notification to be present")?;
    if message != expected {
        return Err(format!("expected notification '{expected}', got '{message}'").into());
    }
    Ok(())
}

#[scenario(path = "tests/features/prompt_library.feature", index = 0)]
fn searching_resets_to_first_page(library_state: LibraryState) {
    let _ = library_state;
}

#[scenario(path = "tests/features/prompt_library.feature", index = 1)]
fn status_filters_combine_with_or(library_state: LibraryState) {
    let _ = library_state;
}

#[scenario(path = "tests/features/prompt_library.feature", index = 2)]
fn paging_past_the_end_shows_no_matches(library_state: LibraryState) {
    let _ = library_state;
}

#[scenario(path = "tests/features/prompt_library.feature", index = 3)]
fn public_prompts_hidden_from_private_view(library_state: LibraryState) {
    let _ = library_state;
}

#[scenario(path = "tests/features/prompt_library.feature", index = 4)]
fn cancelling_a_delete_keeps_the_prompt(library_state: LibraryState) {
    let _ = library_state;
}

#[scenario(path = "tests/features/prompt_library.feature", index = 5)]
fn confirming_a_delete_refreshes_the_listing(library_state: LibraryState) {
    let _ = library_state;
}

#[scenario(path = "tests/features/prompt_library.feature", index = 6)]
fn failed_delete_notifies_and_refreshes(library_state: LibraryState) {
    let _ = library_state;
}
