use crate::{CliError, CliResult, commands::Commands};

use log::{debug, warn};
use proso_core::{
    Alert, Credentials, DEFAULT_ALERT_TYPE, DEFAULT_ERROR_MESSAGE, GenericError, LevelInfo,
    ProfilePatch, RegistrationForm, UserProfile,
};
use proso_session::{
    LoginFlow, LoginOutcome, ProfileView, SessionStore, SignupFlow, SignupPromotion,
};
use serde_json::{Value, json};

/// Execute one command against an initialized store and describe the
/// result as JSON.
pub(crate) async fn run(
    command: Commands,
    store: &SessionStore,
    promotion: &SignupPromotion,
) -> CliResult<Value> {
    match command {
        Commands::Profile { name } => show_profile(store, promotion, name).await,
        Commands::Login { username, password } => login(store, username, password).await,
        Commands::Signup {
            username,
            email,
            password,
            password_check,
            first_name,
            last_name,
        } => {
            let form = RegistrationForm {
                username,
                email,
                password_check: password_check.unwrap_or_else(|| password.clone()),
                password,
                first_name,
                last_name,
                ..Default::default()
            };
            signup(store, form).await
        }
        Commands::Logout => logout(store).await,
        Commands::Answer { correct } => {
            store.record_answer(correct);
            // the points cache is written in the background
            store.settled().await;
            let profile = store.current();
            let suggest_signup =
                promotion.on_question_set_finished(profile.answered_count, &profile);
            Ok(json!({
                "user": public_profile(&profile),
                "level": SessionStore::level_info(&profile),
                "suggest_signup": suggest_signup,
            }))
        }
        Commands::Level { points } => {
            let points = points.unwrap_or_else(|| store.current().points);
            Ok(level_json(points))
        }
        Commands::Save { assignments } => save(store, assignments).await,
        Commands::MobileInit => {
            let initialized = store.init_mobile().await?;
            store.settled().await;
            Ok(json!({
                "initialized": initialized,
                "user": public_profile(&store.current()),
            }))
        }
    }
}

async fn show_profile(
    store: &SessionStore,
    promotion: &SignupPromotion,
    name: Option<String>,
) -> CliResult<Value> {
    let name = name.unwrap_or_else(|| store.current().username);
    let view = ProfileView::open(store.clone(), &name, false).await?;
    let suggest_signup = promotion.should_open_on_start() && store.current().is_anonymous();
    Ok(json!({
        "user": public_profile(&view.user),
        "level": SessionStore::level_info(&view.user),
        "edit_rights": view.edit_rights,
        "suggest_signup": suggest_signup,
    }))
}

async fn login(store: &SessionStore, username: String, password: String) -> CliResult<Value> {
    let Some(mut flow) = LoginFlow::open(store.clone()) else {
        return Err(CliError::usage(format!(
            "already logged in as '{}'; run 'proso logout' first",
            store.current().username
        )));
    };

    flow.credentials = Credentials::new(username, password);
    flow.credentials.validate()?;

    match flow.submit().await {
        LoginOutcome::Reload(profile) => Ok(json!({ "user": public_profile(&profile) })),
        LoginOutcome::Failed => Err(rejected("Login", flow.close_alert(0))),
    }
}

async fn signup(store: &SessionStore, form: RegistrationForm) -> CliResult<Value> {
    let mut flow = SignupFlow::new(store.clone());
    flow.form = form;

    if !flow.submit().await {
        return Err(rejected("Signup", flow.close_alert(0)));
    }

    // submit re-runs init; wait for the new account's full profile
    store.settled().await;
    Ok(json!({
        "success": flow.success,
        "user": public_profile(&store.current()),
    }))
}

async fn logout(store: &SessionStore) -> CliResult<Value> {
    let remote = store.logout();
    let acknowledged = match remote.await {
        Ok(result) => result.is_ok(),
        Err(e) => {
            warn!("Logout task did not complete: {e}");
            false
        }
    };
    store.settled().await;

    Ok(json!({
        "acknowledged": acknowledged,
        "user": public_profile(&store.current()),
    }))
}

async fn save(store: &SessionStore, assignments: Vec<(String, String)>) -> CliResult<Value> {
    let username = store.current().username;
    let mut view = ProfileView::open(store.clone(), &username, true).await?;
    if !view.editing {
        return Err(CliError::usage("log in before editing a profile"));
    }

    let mut patch = ProfilePatch::default();
    for (key, value) in &assignments {
        patch.set_field(key, value)?;
    }
    debug!("Saving {} profile field(s)", assignments.len());
    view.user.merge(patch);

    let saved = view.save().await.map_err(CliError::Save)?;
    Ok(json!({ "user": public_profile(&saved) }))
}

fn level_json(points: u64) -> Value {
    let info = LevelInfo::for_points(points);
    json!({
        "points": points,
        "level": info,
        "progress": info.progress(),
    })
}

/// Profile as printed: the CSRF token stays out of the output
fn public_profile(profile: &UserProfile) -> UserProfile {
    UserProfile {
        csrftoken: None,
        ..profile.clone()
    }
}

fn rejected(action: &'static str, alert: Option<Alert>) -> CliError {
    let error = alert
        .map(|alert| GenericError::new(alert.kind, alert.message))
        .unwrap_or_else(|| GenericError::new(DEFAULT_ALERT_TYPE, DEFAULT_ERROR_MESSAGE));
    CliError::Rejected { action, error }
}
