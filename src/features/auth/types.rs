use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

#[derive(Clone, Debug)]
pub struct RegistrationForm {
    pub full_name: String,
    pub cpf: String,
    pub email: String,
    pub password: SecretString,
    pub password_confirmation: SecretString,
}

#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a LoginForm> for LoginRequest<'a> {
    fn from(form: &'a LoginForm) -> Self {
        Self {
            email: form.email.trim(),
            password: form.password.expose_secret(),
        }
    }
}

/// `POST /login/` answer.
#[derive(Deserialize)]
pub(crate) struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

#[derive(Serialize)]
pub(crate) struct LogoutRequest<'a> {
    pub refresh: Option<&'a str>,
}

/// Wire shape of `POST /register/`; the backend uses Portuguese field names.
#[derive(Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub nome_completo: &'a str,
    pub cpf: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub password2: &'a str,
}

impl<'a> From<&'a RegistrationForm> for RegisterRequest<'a> {
    fn from(form: &'a RegistrationForm) -> Self {
        Self {
            nome_completo: form.full_name.trim(),
            cpf: form.cpf.trim(),
            email: form.email.trim(),
            password: form.password.expose_secret(),
            password2: form.password_confirmation.expose_secret(),
        }
    }
}
