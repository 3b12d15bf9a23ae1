use poem_openapi::Object;

/// Fields are optional so that missing values surface as campaign validation
/// errors rather than body parse failures.
#[derive(Object, Debug)]
pub struct SendTemplateRequestDto {
    pub template: Option<String>,
    pub language: Option<String>,
    pub contacts: Option<Vec<ContactDto>>,
}

#[derive(Object, Debug, Clone)]
pub struct ContactDto {
    #[oai(default)]
    pub name: String,
    #[oai(default)]
    pub phone: String,
}
