/// Developer demo routes (`/demo/*.do`)
///
/// The three creation routes build the same record three ways: reading the
/// parameter map by hand, asking for declared typed parameters, and binding
/// a command object.
use crate::{
    binding::{BindError, Command, FormParams, FromParams},
    error::{Result, ServerError},
    middleware::Flash,
    state::AppState,
    view::{Redirect, View},
};
use axum::extract::State;
use devroster_core::types::{Dev, DevId, Gender};

pub const DEV_FORM_VIEW: &str = "demo/devForm";
pub const DEV_RESULT_VIEW: &str = "demo/devResult";
pub const DEV_LIST_VIEW: &str = "demo/devList";
pub const DEV_UPDATE_FORM_VIEW: &str = "demo/devUpdateForm";

pub const DEV_LIST_PATH: &str = "/demo/devList.do";

/// Name used by the declared-parameter route when none is submitted
pub const DEFAULT_NAME: &str = "(unnamed)";

pub const MSG_CREATED: &str = "creation succeeded";
pub const MSG_UPDATED: &str = "update succeeded";
pub const MSG_DELETED: &str = "deletion succeeded";

/// GET /demo/devForm.do
pub async fn dev_form(flash: Flash) -> View {
    tracing::info!("{} requested", "/demo/devForm.do");
    View::new(DEV_FORM_VIEW).with_flash(&flash)
}

/// POST /demo/dev1.do - read and convert every parameter by hand
pub async fn dev1(flash: Flash, params: FormParams) -> Result<View> {
    let name = params.get("name").unwrap_or_default().to_string();

    let raw_career = params
        .get("career")
        .ok_or_else(|| BindError::missing("career"))?;
    let career: u32 = raw_career
        .parse()
        .map_err(|e| BindError::invalid("career", raw_career, e))?;

    let email = params.get("email").unwrap_or_default().to_string();

    let gender = match params.get("gender") {
        Some(token) => Some(
            token
                .parse::<Gender>()
                .map_err(|e| BindError::invalid("gender", token, e))?,
        ),
        None => None,
    };

    let languages: Vec<String> = params
        .get_all("lang")
        .into_iter()
        .map(str::to_string)
        .collect();

    let dev = Dev::new(name, career, email, gender, languages);
    tracing::info!("dev = {:?}", dev);

    View::new(DEV_RESULT_VIEW)
        .with_flash(&flash)
        .attribute("dev", &dev)
}

/// POST /demo/dev2.do - declared parameters
///
/// `name` is optional with a default, `gender` optional; `career`, `email`
/// and at least one `lang` are required.
pub async fn dev2(flash: Flash, params: FormParams) -> Result<View> {
    let name = params.optional_or("name", DEFAULT_NAME);
    let career: u32 = params.required("career")?;
    let email: String = params.required("email")?;
    let gender: Option<Gender> = params.optional("gender")?;
    let languages = params.required_all("lang")?;

    let dev = Dev::new(name, career, email, gender, languages);
    tracing::info!("dev = {:?}", dev);

    View::new(DEV_RESULT_VIEW)
        .with_flash(&flash)
        .attribute("dev", &dev)
}

/// POST /demo/dev3.do - command object
pub async fn dev3(flash: Flash, Command(dev): Command<Dev>) -> Result<View> {
    tracing::info!("dev = {:?}", dev);

    View::new(DEV_RESULT_VIEW)
        .with_flash(&flash)
        .attribute("dev", &dev)
}

/// POST /demo/insertDev.do
pub async fn insert_dev(
    State(app_state): State<AppState>,
    Command(dev): Command<Dev>,
) -> Result<Redirect> {
    let result = app_state.devs.insert(&dev).await?;
    tracing::info!("insert result = {}", result);

    let ticket = app_state.flash.stash_one("msg", MSG_CREATED);
    Ok(Redirect::to("/").with_flash(ticket))
}

/// GET /demo/devList.do
pub async fn dev_list(State(app_state): State<AppState>, flash: Flash) -> Result<View> {
    let list = app_state.devs.select_all().await?;
    tracing::info!("list = {:?}", list);

    View::new(DEV_LIST_VIEW)
        .with_flash(&flash)
        .attribute("list", &list)
}

/// GET /demo/updateDev.do?no=
pub async fn update_dev_form(
    State(app_state): State<AppState>,
    flash: Flash,
    params: FormParams,
) -> Result<View> {
    let no: DevId = params.required("no")?;

    let update_info = app_state
        .devs
        .select_by_key(no)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Dev {} not found", no)))?;
    tracing::info!("updateInfo = {:?}", update_info);

    View::new(DEV_UPDATE_FORM_VIEW)
        .with_flash(&flash)
        .attribute("updateInfo", &update_info)
}

/// POST /demo/updateDev.do
///
/// The record is command-bound like `dev3.do`, but the key must be sent.
pub async fn update_dev(State(app_state): State<AppState>, params: FormParams) -> Result<Redirect> {
    if params.get("no").or_else(|| params.get("id")).is_none() {
        return Err(BindError::missing("no").into());
    }
    let dev = Dev::from_params(&params)?;

    let result = app_state.devs.update(&dev).await?;
    if result == 0 {
        tracing::warn!("update matched no dev for key {}", dev.id);
    }

    let ticket = app_state.flash.stash_one("msg", MSG_UPDATED);
    Ok(Redirect::to(DEV_LIST_PATH).with_flash(ticket))
}

/// POST /demo/deleteDev.do
pub async fn delete_dev(State(app_state): State<AppState>, params: FormParams) -> Result<Redirect> {
    let no: DevId = params.required("no")?;

    let result = app_state.devs.delete(no).await?;
    if result == 0 {
        tracing::warn!("delete matched no dev for key {}", no);
    }

    let ticket = app_state.flash.stash_one("msg", MSG_DELETED);
    Ok(Redirect::to("/").with_flash(ticket))
}
