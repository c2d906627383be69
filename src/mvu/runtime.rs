use tracing::error;

use super::error::AppError;
use super::{leaderboard, updates};

/// Runs the MVU loop for the leaderboard: seeds with `init_msg` and drains effects.
///
/// # Errors
///
/// Returns the first failure; it is also recorded on the model.
pub async fn run_leaderboard(
    model: &mut leaderboard::LeaderboardModel,
    init_msg: leaderboard::Msg,
    deps: leaderboard::Deps<'_>,
) -> Result<(), AppError> {
    let mut effects = leaderboard::update(model, init_msg);
    while let Some(effect) = effects.pop() {
        let msg = leaderboard::run_effect(effect, model, deps).await;
        match msg {
            leaderboard::Msg::Failed(e) => {
                error!(error = %e, "leaderboard load failed");
                leaderboard::update(model, leaderboard::Msg::Failed(e.clone()));
                return Err(e);
            }
            other => {
                let next = leaderboard::update(model, other);
                effects.extend(next);
            }
        }
    }
    Ok(())
}

/// Same loop for the updates list.
///
/// # Errors
///
/// Returns the first failure; it is also recorded on the model.
pub async fn run_updates(
    model: &mut updates::UpdatesModel,
    init_msg: updates::Msg,
    deps: updates::Deps<'_>,
) -> Result<(), AppError> {
    let mut effects = updates::update(model, init_msg);
    while let Some(effect) = effects.pop() {
        match updates::run_effect(effect, model, deps).await {
            updates::Msg::Failed(e) => {
                error!(error = %e, "updates load failed");
                updates::update(model, updates::Msg::Failed(e.clone()));
                return Err(e);
            }
            other => effects.extend(updates::update(model, other)),
        }
    }
    Ok(())
}
