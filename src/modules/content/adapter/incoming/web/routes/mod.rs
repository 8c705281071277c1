pub mod certifications;
pub mod dashboard;
pub mod education;
pub mod experiences;
pub mod personal;
pub mod projects;
pub mod public_site;
pub mod skills;

mod support;

pub use certifications::{
    create_certification_handler, delete_certification_handler, get_certification_handler,
    list_certifications_handler, update_certification_handler,
};
pub use dashboard::dashboard_handler;
pub use education::{
    create_education_handler, delete_education_handler, get_education_handler,
    list_education_handler, update_education_handler,
};
pub use experiences::{
    create_experience_handler, delete_experience_handler, get_experience_handler,
    list_experiences_handler, update_experience_handler,
};
pub use personal::{get_personal_handler, put_personal_handler};
pub use projects::{
    create_project_handler, delete_project_handler, get_project_handler, list_projects_handler,
    update_project_handler,
};
pub use public_site::{
    public_certifications_handler, public_education_handler, public_experiences_handler,
    public_personal_handler, public_project_detail_handler, public_projects_handler,
    public_skills_handler, public_translations_handler,
};
pub use skills::{
    create_skill_handler, delete_skill_handler, get_skill_handler, list_skills_handler,
    reorder_skills_handler, update_skill_handler, ReorderSkillsDto,
};
