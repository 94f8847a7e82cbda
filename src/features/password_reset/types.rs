use serde::Serialize;

#[derive(Serialize)]
pub(crate) struct ResetRequest<'a> {
    pub email: &'a str,
}

#[derive(Serialize)]
pub(crate) struct VerifyRequest<'a> {
    pub email: &'a str,
    pub token: &'a str,
}

#[derive(Serialize)]
pub(crate) struct ConfirmRequest<'a> {
    pub email: &'a str,
    pub token: &'a str,
    pub password: &'a str,
    pub password2: &'a str,
}
