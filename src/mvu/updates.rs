use maud::Markup;

use super::error::AppError;
use crate::controller::loader::Loader;
use crate::model::{Update, UpdatesDocument};
use crate::view::render_inline_error;
use crate::view::updates::{UPDATES_ERROR, render_updates};

#[derive(Debug, Clone, Default)]
pub struct UpdatesModel {
    pub updates: Option<Vec<Update>>,
    pub markup: Option<Markup>,
    pub error: Option<AppError>,
}

impl UpdatesModel {
    #[must_use]
    pub fn into_markup(self) -> Markup {
        match (self.error, self.markup) {
            (None, Some(markup)) => markup,
            _ => render_inline_error(UPDATES_ERROR),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    PageLoad,
    UpdatesLoaded(UpdatesDocument),
    Rendered(Markup),
    Failed(AppError),
}

#[derive(Debug, Clone)]
pub enum Effect {
    LoadUpdates,
    RenderTemplate,
}

pub fn update(model: &mut UpdatesModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageLoad => {
            *model = UpdatesModel::default();
            vec![Effect::LoadUpdates]
        }
        Msg::UpdatesLoaded(doc) => {
            model.updates = Some(doc.updates);
            vec![Effect::RenderTemplate]
        }
        Msg::Rendered(markup) => {
            model.markup = Some(markup);
            vec![]
        }
        Msg::Failed(e) => {
            model.error = Some(e);
            vec![]
        }
    }
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub loader: &'a Loader,
}

pub async fn run_effect(effect: Effect, model: &UpdatesModel, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::LoadUpdates => match deps.loader.load_updates().await {
            Ok(doc) => Msg::UpdatesLoaded(doc),
            Err(e) => Msg::Failed(AppError::from(e)),
        },
        Effect::RenderTemplate => match model.updates.as_ref() {
            Some(updates) => Msg::Rendered(render_updates(updates)),
            None => Msg::Failed(AppError::Other("Render requested without data".into())),
        },
    }
}
