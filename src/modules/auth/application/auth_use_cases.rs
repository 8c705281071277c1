use std::sync::Arc;

use crate::modules::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::modules::auth::application::use_cases::logout_admin::ILogoutAdminUseCase;

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn ILoginAdminUseCase>,
    pub logout: Arc<dyn ILogoutAdminUseCase>,
}
