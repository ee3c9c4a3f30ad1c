use thiserror::Error;
use url::Url;

/// Icon identifier for a social entry, mapped to a glyph by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Instagram,
    LinkedIn,
    Mail,
}

/// What activating a social entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialAction {
    /// Open the entry's link in a new browsing context.
    OpenLink,
    /// Copy the entry's handle (the contact email) to the clipboard.
    CopyEmail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Icon,
    pub link: String,
    pub label: String,
    pub username: String,
}

impl SocialLink {
    /// The mail entry copies its handle; every other entry opens its link.
    pub fn action(&self) -> SocialAction {
        if self.icon == Icon::Mail {
            SocialAction::CopyEmail
        } else {
            SocialAction::OpenLink
        }
    }
}

/// A showcased project. `logo` is a short monogram shown where a logo image
/// would be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub tagline: String,
    pub logo: String,
    pub preview_link: String,
    pub mrr: u32,
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
}

/// Bio card content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub years_badge: String,
    pub location: String,
    pub summary: String,
}

/// Everything the page displays. Fixed at build time; declaration order of
/// each list defines its rotation sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub profile: Profile,
    pub socials: Vec<SocialLink>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("{list} list is empty; nothing to rotate")]
    EmptyList { list: &'static str },
    #[error("{label}: link {link:?} does not parse: {source}")]
    InvalidLink {
        label: String,
        link: String,
        source: url::ParseError,
    },
}

impl SiteContent {
    /// The built-in page content.
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "Francisco Mancuello".to_string(),
                role: "Frontend Developer".to_string(),
                years_badge: "+7 años".to_string(),
                location: "Paraguay".to_string(),
                summary: "Especializado en transformar ideas en negocios rentables con un \
                          enfoque en el crecimiento rápido y sostenible."
                    .to_string(),
            },
            socials: vec![
                SocialLink {
                    icon: Icon::Instagram,
                    link: "https://www.instagram.com/MranDvX".to_string(),
                    label: "Instagram".to_string(),
                    username: "@MranDvX".to_string(),
                },
                SocialLink {
                    icon: Icon::LinkedIn,
                    link: "https://www.linkedin.com/in/mrandvx/".to_string(),
                    label: "LinkedIn".to_string(),
                    username: "@mrandvx".to_string(),
                },
                SocialLink {
                    icon: Icon::Mail,
                    link: "mailto:franmavazq@gmail.com".to_string(),
                    label: "Email".to_string(),
                    username: "franmavazq@gmail.com".to_string(),
                },
            ],
            projects: vec![
                Project {
                    name: "Kahop".to_string(),
                    tagline: "Plataforma de entrevistas asistida por IA".to_string(),
                    logo: "KA".to_string(),
                    preview_link: "https://www.kahop.com/es/pagina-principal/".to_string(),
                    mrr: 1500,
                    tech_stack: vec![
                        "Next.js".to_string(),
                        "IA".to_string(),
                        "TypeScript".to_string(),
                    ],
                },
                Project {
                    name: "Domain Score".to_string(),
                    tagline: "Herramienta de análisis de dominios web".to_string(),
                    logo: "DS".to_string(),
                    preview_link: "https://domainscore.com/".to_string(),
                    mrr: 2000,
                    tech_stack: vec![
                        "Next.js".to_string(),
                        "IA".to_string(),
                        "TypeScript".to_string(),
                    ],
                },
                Project {
                    name: "Legappdo".to_string(),
                    tagline: "Aplicación de gestión legal para abogados".to_string(),
                    logo: "LG".to_string(),
                    preview_link: "https://legappdo.com/".to_string(),
                    mrr: 1000,
                    tech_stack: vec![
                        "Next.js".to_string(),
                        "Serverless".to_string(),
                        "PostgreSQL".to_string(),
                        "AWS".to_string(),
                    ],
                },
            ],
            testimonials: vec![
                Testimonial {
                    text: "Francisco destaca por su capacidad de apoyar a sus compañeros y \
                           asume los retos siempre con buena disposición, sabe trabajar tanto \
                           independiente como en equipo, su forma de ser facilita el trato, \
                           atiende oportunamente y es responsable."
                        .to_string(),
                    author: "Julian Dario Luna Patiño, Software Architect | AWS Community Builder"
                        .to_string(),
                },
                Testimonial {
                    text: "Francisco cuenta con una gran habilidad para trabajar en equipos \
                           remotos, siempre busca apoyar a sus compañeros y aprender cosas \
                           nuevas, considero que técnicamente es muy bueno ya que cumple con \
                           los tiempos de entrega y calidad. Siempre está abierto a dar su \
                           opinión y recibir feedback."
                        .to_string(),
                    author: "Fernando Arey Durán, Software engineer".to_string(),
                },
                Testimonial {
                    text: "Francisco is a great software engineer and is a good and efficient \
                           professional, He obtained great results working in a collaborative \
                           team. He combines his solid background knowledge and his soft \
                           skills very well."
                        .to_string(),
                    author: "Santiago Valle, Software Engineer | Cloud Engineer | AWS".to_string(),
                },
                Testimonial {
                    text: "Francisco es un buen compañero y muy buen desarrollador, tiene \
                           mucha experiencia y sabe lidiar con los requerimientos provenientes \
                           de negocio/producto y con stakeholders, QAs y demás involucrados."
                        .to_string(),
                    author: "Saul Vega Ramírez, Software Engineer".to_string(),
                },
                Testimonial {
                    text: "Francisco es un profesional excepcional con habilidades y \
                           conocimientos. Posee una visión estratégica. Siempre se enfoca en \
                           la calidad del trabajo y es un líder inspirador."
                        .to_string(),
                    author: "Christian Celis, ICT Engineer".to_string(),
                },
                Testimonial {
                    text: "Gran líder sabe guiar muy bien y tiene una gran actitud".to_string(),
                    author: "Ricardo Andrés Mejía Córdoba, Full-Stack Developer".to_string(),
                },
                Testimonial {
                    text: "Francisco posee una gran habilidad en cuanto al liderazgo. Sabe \
                           manejar las situaciones, es atento y siempre dispuesto a ayudar. Su \
                           personalidad facilita la comunicación con él y su forma en \
                           estructurar las responsabilidades e identificar las habilidades de \
                           cada integrante."
                        .to_string(),
                    author: "David Carreño, Desarrollador FrontEnd".to_string(),
                },
            ],
        }
    }

    /// Sum of all project monthly-recurring values, shown on the MRR card.
    pub fn total_mrr(&self) -> u32 {
        self.projects.iter().map(|p| p.mrr).sum()
    }

    /// The fixed string the copy action writes to the clipboard.
    pub fn contact_email(&self) -> Option<&str> {
        self.socials
            .iter()
            .find(|s| s.action() == SocialAction::CopyEmail)
            .map(|s| s.username.as_str())
    }

    /// Startup check: every rotated list must be non-empty and every
    /// outbound link must parse. The view never mounts over invalid content.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.socials.is_empty() {
            return Err(ContentError::EmptyList {
                list: "social links",
            });
        }
        if self.projects.is_empty() {
            return Err(ContentError::EmptyList { list: "projects" });
        }
        if self.testimonials.is_empty() {
            return Err(ContentError::EmptyList {
                list: "testimonials",
            });
        }
        for social in &self.socials {
            Url::parse(&social.link).map_err(|source| ContentError::InvalidLink {
                label: social.label.clone(),
                link: social.link.clone(),
                source,
            })?;
        }
        for project in &self.projects {
            Url::parse(&project.preview_link).map_err(|source| ContentError::InvalidLink {
                label: project.name.clone(),
                link: project.preview_link.clone(),
                source,
            })?;
        }
        Ok(())
    }
}
