use super::{params::parse_value, BindError, FormParams};
use crate::error::ServerError;
use axum::extract::{FromRequest, Request};
use devroster_core::types::{Dev, Gender};

/// Types that can be populated from request parameters by name
pub trait FromParams: Sized {
    fn from_params(params: &FormParams) -> Result<Self, BindError>;
}

/// Extractor for a command object bound with [`FromParams`]
#[derive(Debug, Clone)]
pub struct Command<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for Command<T>
where
    S: Send + Sync,
    T: FromParams,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let params = FormParams::from_request(req, state).await?;
        Ok(Command(T::from_params(&params)?))
    }
}

/// Writes the submitted values of one parameter into a field
type FieldBinder<T> = fn(&mut T, &str, &[&str]) -> Result<(), BindError>;

/// Start from `T::default()` and apply every binder whose parameter was sent
fn bind_fields<T: Default>(
    params: &FormParams,
    fields: &[(&str, FieldBinder<T>)],
) -> Result<T, BindError> {
    let mut target = T::default();
    for (name, bind) in fields {
        let values = params.get_all(name);
        if !values.is_empty() {
            bind(&mut target, name, &values)?;
        }
    }
    Ok(target)
}

// `no` is the key's name on the update and delete forms
const DEV_FIELDS: &[(&str, FieldBinder<Dev>)] = &[
    ("id", bind_dev_id),
    ("no", bind_dev_id),
    ("name", bind_dev_name),
    ("career", bind_dev_career),
    ("email", bind_dev_email),
    ("gender", bind_dev_gender),
    ("lang", bind_dev_languages),
];

fn bind_dev_id(dev: &mut Dev, name: &str, values: &[&str]) -> Result<(), BindError> {
    dev.id = parse_value(name, values[0])?;
    Ok(())
}

fn bind_dev_name(dev: &mut Dev, _: &str, values: &[&str]) -> Result<(), BindError> {
    dev.name = values[0].to_string();
    Ok(())
}

fn bind_dev_career(dev: &mut Dev, name: &str, values: &[&str]) -> Result<(), BindError> {
    dev.career = parse_value(name, values[0])?;
    Ok(())
}

fn bind_dev_email(dev: &mut Dev, _: &str, values: &[&str]) -> Result<(), BindError> {
    dev.email = values[0].to_string();
    Ok(())
}

fn bind_dev_gender(dev: &mut Dev, name: &str, values: &[&str]) -> Result<(), BindError> {
    dev.gender = match values[0] {
        "" => None,
        token => Some(parse_value::<Gender>(name, token)?),
    };
    Ok(())
}

fn bind_dev_languages(dev: &mut Dev, _: &str, values: &[&str]) -> Result<(), BindError> {
    dev.languages = values.iter().map(|v| (*v).to_string()).collect();
    Ok(())
}

impl FromParams for Dev {
    fn from_params(params: &FormParams) -> Result<Self, BindError> {
        bind_fields(params, DEV_FIELDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bind(body: &str) -> Result<Dev, BindError> {
        Dev::from_params(&FormParams::parse(None, body.as_bytes()))
    }

    #[test]
    fn binds_matching_names() {
        let dev = bind("name=Hong&career=3&email=h%40x.com&gender=M&lang=Java&lang=C").unwrap();
        assert_eq!(dev.id, 0);
        assert_eq!(dev.name, "Hong");
        assert_eq!(dev.career, 3);
        assert_eq!(dev.email, "h@x.com");
        assert_eq!(dev.gender, Some(Gender::Male));
        assert_eq!(dev.languages, vec!["Java", "C"]);
    }

    #[test]
    fn absent_fields_keep_defaults() {
        let dev = bind("name=Only").unwrap();
        assert_eq!(dev.career, 0);
        assert_eq!(dev.email, "");
        assert_eq!(dev.gender, None);
        assert!(dev.languages.is_empty());
    }

    #[test]
    fn key_binds_from_id_or_no() {
        assert_eq!(bind("id=12").unwrap().id, 12);
        assert_eq!(bind("no=7").unwrap().id, 7);
        assert!(bind("no=seven").is_err());
    }

    #[test]
    fn malformed_values_fail() {
        assert!(matches!(
            bind("career=abc"),
            Err(BindError::Invalid { ref name, .. }) if name == "career"
        ));
        assert!(matches!(
            bind("gender=UNKNOWN_TOKEN"),
            Err(BindError::Invalid { ref name, .. }) if name == "gender"
        ));
    }

    #[test]
    fn empty_gender_is_absent() {
        assert_eq!(bind("gender=").unwrap().gender, None);
    }

    #[test]
    fn unknown_parameters_are_ignored() {
        let dev = bind("name=Kim&createdAt=yesterday&extra=1").unwrap();
        assert_eq!(dev.name, "Kim");
    }
}
