/// Catalog operations, used for log categories, metrics labels and the
/// fixed messages shown to callers when storage fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    SubmitContact,
    ListContacts,
    ListProjects,
    ListServices,
    ListTestimonials,
    GetCompanyInfo,
    Seed,
    CreateStatusCheck,
    ListStatusChecks,
}

impl Operation {
    /// Stable category label.
    pub fn label(self) -> &'static str {
        match self {
            Operation::SubmitContact => "contacts.create",
            Operation::ListContacts => "contacts.list",
            Operation::ListProjects => "projects.list",
            Operation::ListServices => "services.list",
            Operation::ListTestimonials => "testimonials.list",
            Operation::GetCompanyInfo => "company.get",
            Operation::Seed => "seed",
            Operation::CreateStatusCheck => "status.create",
            Operation::ListStatusChecks => "status.list",
        }
    }

    /// Opaque message returned to the caller on a storage failure.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::SubmitContact => "Error interno del servidor",
            Operation::ListContacts => "Error al obtener contactos",
            Operation::ListProjects => "Error al obtener proyectos",
            Operation::ListServices => "Error al obtener servicios",
            Operation::ListTestimonials => "Error al obtener testimoniales",
            Operation::GetCompanyInfo => "Error al obtener información de la empresa",
            Operation::Seed => "Error al poblar la base de datos",
            Operation::CreateStatusCheck => "Error al registrar el estado",
            Operation::ListStatusChecks => "Error al obtener estados",
        }
    }
}
