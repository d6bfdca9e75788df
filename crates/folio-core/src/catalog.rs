use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::selection::{CategoryFilter, Selection, select};
use crate::{Category, CoreError, ExternalLink, Project, PubStatus, Publication, Service};

/// Highlighted author in the built-in author lines.
const OWNER: &str = "<strong><em>Md. Golam Rabbani Abir</em></strong>";

/// The full record set. Never mutated after construction; every selection
/// produces a new [`CatalogView`] borrowing from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// The ordered result of applying a [`Selection`] to a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView<'a> {
    pub selection: Selection,
    pub publications: Vec<&'a Publication>,
}

impl CatalogView<'_> {
    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.publications.len()
    }
}

impl Catalog {
    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        Self {
            publications: builtin_publications(),
            services: builtin_services(),
            projects: builtin_projects(),
        }
    }

    /// Parse a TOML catalog and check its invariants.
    pub fn from_toml_str(content: &str) -> Result<Self, CoreError> {
        let catalog = Self::parse_unchecked(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a TOML catalog without checking invariants.
    pub fn parse_unchecked(content: &str) -> Result<Self, CoreError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a TOML catalog from disk.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            publications = catalog.publications.len(),
            services = catalog.services.len(),
            projects = catalog.projects.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// The catalog at `path`, or the built-in one when no path is given.
    pub fn resolve(path: Option<&Path>) -> Result<Self, CoreError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::builtin()),
        }
    }

    /// Check the record invariants, reporting every violation at once.
    pub fn validate(&self) -> Result<(), CoreError> {
        let problems = self.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            for p in &problems {
                tracing::warn!(problem = %p, "catalog invariant violated");
            }
            Err(CoreError::Validation(problems.join("; ")))
        }
    }

    /// Human-readable list of invariant violations (empty when valid).
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut seen = HashSet::new();

        for p in &self.publications {
            if p.id.trim().is_empty() {
                problems.push(format!("publication {:?} has an empty id", p.title));
            } else if !seen.insert(p.id.as_str()) {
                problems.push(format!("duplicate publication id {:?}", p.id));
            }
            if !(1000..=9999).contains(&p.year) {
                problems.push(format!("{}: year {} is not four digits", p.id, p.year));
            }
            if p.title.trim().is_empty() {
                problems.push(format!("{}: empty title", p.id));
            }
            if p.category.trim().is_empty() {
                problems.push(format!("{}: empty category", p.id));
            } else if p.category.eq_ignore_ascii_case("all") {
                problems.push(format!("{}: category tag \"all\" is reserved", p.id));
            }
            if let Some(link) = &p.link
                && (link.url.trim().is_empty() || link.label.trim().is_empty())
            {
                problems.push(format!("{}: link needs both url and label", p.id));
            }
        }

        let mut service_ids = HashSet::new();
        for s in &self.services {
            if !service_ids.insert(s.id.as_str()) {
                problems.push(format!("duplicate service id {:?}", s.id));
            }
        }

        problems
    }

    /// Distinct publication categories in first-appearance order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = HashSet::new();
        self.publications
            .iter()
            .filter(|p| seen.insert(p.category.as_str()))
            .map(Publication::category)
            .collect()
    }

    pub fn has_category(&self, tag: &str) -> bool {
        self.publications.iter().any(|p| p.category == tag)
    }

    /// Apply `selection` to the publication list.
    pub fn view(&self, selection: &Selection) -> CatalogView<'_> {
        CatalogView {
            selection: selection.clone(),
            publications: select(&self.publications, selection),
        }
    }

    /// Filter after `current` in control order: all, then each category.
    /// Wraps back to all; an unknown category also goes back to all.
    pub fn next_filter(&self, current: &CategoryFilter) -> CategoryFilter {
        let categories = self.categories();
        let next_idx = match current {
            CategoryFilter::All => 0,
            CategoryFilter::Category(tag) => match categories.iter().position(|c| c.tag == *tag) {
                Some(i) => i + 1,
                None => categories.len(),
            },
        };
        categories
            .get(next_idx)
            .map(|c| CategoryFilter::Category(c.tag.clone()))
            .unwrap_or_default()
    }

    /// Label for a filter: the category label, "All" or the raw tag.
    pub fn filter_label(&self, filter: &CategoryFilter) -> String {
        filter.label(&self.publications)
    }
}

#[allow(clippy::too_many_arguments)]
fn publication(
    id: &str,
    year: u16,
    category: &str,
    category_label: &str,
    style: &str,
    title: &str,
    authors: &str,
    link: Option<(&str, &str)>,
    status: PubStatus,
) -> Publication {
    Publication {
        id: id.into(),
        year,
        category: category.into(),
        category_label: category_label.into(),
        style: style.into(),
        title: title.into(),
        authors: authors.replace("{owner}", OWNER),
        link: link.map(|(url, label)| ExternalLink {
            url: url.into(),
            label: label.into(),
        }),
        status,
    }
}

fn builtin_publications() -> Vec<Publication> {
    vec![
        publication(
            "pub1",
            2024,
            "computer-vision",
            "Computer Vision",
            "goldenrod",
            "Advancing Low-Light Object Detection with YOLO Models: An Empirical Study and Performance Evaluation",
            "Samier Uddin Ahammad Shovo, {owner}, Md Mohsin Kabir, M. F. Mridha",
            Some(("https://doi.org/10.1049/ccs2.12114", "DOI: 10.1049/ccs2.12114")),
            PubStatus::Published,
        ),
        publication(
            "pub2",
            2024,
            "nlp",
            "NLP",
            "royal",
            "Achieving High-Accuracy Human Activity Recognition Using BERT-Based Classwise Ensemble Models",
            "KM Nafiur Rahman Fuad, Mumtahina Ahmed, {owner}, Md Anisur Rahman, Md Zakir Hossain Zamil, M. F. Mridha, Jungpil Shin",
            Some((
                "http://dx.doi.org/10.1109/COMPAS60761.2024.10796319",
                "DOI: 10.1109/COMPAS60761.2024.10796319",
            )),
            PubStatus::Published,
        ),
        publication(
            "pub3",
            2025,
            "medical-ai",
            "Medical AI",
            "midnight",
            "NeuroNet: An Attention-Driven Lightweight Deep Learning Model for Improved Brain Cancer Diagnosis",
            "Istyak Ahmed, Hadiur Rahman Nabil, {owner}, Tazdik Hossain, Aritra Das, M. F. Mridha",
            Some((
                "https://doi.org/10.1109/DASA63652.2024.10836274",
                "DOI: 10.1109/DASA63652.2024.10836274",
            )),
            PubStatus::Published,
        ),
        publication(
            "pub4",
            2024,
            "astrophysics",
            "Astrophysics",
            "goldenrod",
            "Quantitative Analysis of Dark Matter Distribution Effects on Galactic Rotation Curves",
            "Uland Rozario, K M Nafiur Rahman Fuad, {owner}, Tanjim Hussain Sajin, Md. Mahbubur Rahman, Adit Ishraq, M. Firoz Mridha",
            Some((
                "https://papers.ssrn.com/sol3/papers.cfm?abstract_id=5148444",
                "SSRN 5148444",
            )),
            PubStatus::Preprint,
        ),
        publication(
            "pub5",
            2024,
            "autonomous-vehicles",
            "Autonomous Vehicles",
            "goldenrod",
            "DeepUNet24: A Deep Learning Model for Lane Segmentation in Autonomous Vehicles Navigation",
            "Hashibul Ahsan Shoaib, Mst. Moushumi Khatun, {owner}, Adit Ishraq, Sabiha Firdaus, Kamruddin Nur, M. F. Mridha",
            Some((
                "https://dl.acm.org/doi/full/10.1145/3723178.3723232",
                "DOI: 10.1145/3723178.3723232",
            )),
            PubStatus::Published,
        ),
        publication(
            "pub6",
            2024,
            "graph-neural-networks",
            "Graph Neural Networks",
            "slate",
            "Particle Level Noise Removal Using Machine Learning and Graph Neural Networks: A Comparative Study",
            "{owner}, Uland Rozario, K M Nafiur Rahman Fuad, Samier Uddin Ahammad Shovo, Mumtahina Ahmed, Md. Mamun Hossain",
            Some((
                "https://ieeexplore.ieee.org/abstract/document/11022525",
                "DOI: 10.1109/ICCIT64611.2024.11022525",
            )),
            PubStatus::Published,
        ),
        publication(
            "pub7",
            2024,
            "healthcare-ai",
            "Healthcare AI",
            "royal",
            "Predicting Hospital Length of Stay Using Residual Neural Networks with Self-Attention: A Deep Learning Approach",
            "Md Shahriar Mahmud Bhuiyan, Md Al Rafi, Gourab Nicholas Rodrigues, Md Nazmul Hossain Mir, {owner}, M. Firoz Mridha, Jungpil Shin",
            Some((
                "https://ieeexplore.ieee.org/abstract/document/11022412",
                "DOI: 10.1109/ICCIT64611.2024.11022412",
            )),
            PubStatus::Published,
        ),
        publication(
            "pub8",
            2025,
            "time-series",
            "Energy Forecasting",
            "goldenrod",
            "ABMF-Net: An Attentive Bayesian Multi-Stage Deep Learning Model for Robust Forecasting of Electricity Price and Demand",
            "Md Nazmul Hossain Mir, Arindam Kishor Biswas, Md Shariful Alam Bhuiyan, {owner}, M. Firoz Mridha",
            Some((
                "https://ieeexplore.ieee.org/abstract/document/11034710",
                "DOI: 10.1109/ICCIT64611.2024.11022525",
            )),
            PubStatus::Published,
        ),
        publication(
            "pub9",
            2025,
            "remote-sensing",
            "Remote Sensing",
            "goldenrod",
            "DeforestNet-X: A Novel Hybrid CNN-Transformer Model for Deforestation and Urban Mapping in Environmental and Urban Applications",
            "Md Rokibul Hasan, Mohammad Balayet Hossain Saki, Md Amit Hasan, Md Shahin Alam Mozumder, {owner}, Adit Ishraq, M. Firoz Mridha",
            None,
            PubStatus::InReview,
        ),
    ]
}

fn service(
    id: &str,
    title: &str,
    icon: &str,
    accent: &str,
    description: &str,
    outcomes: &[&str],
) -> Service {
    Service {
        id: id.into(),
        title: title.into(),
        icon: icon.into(),
        accent: accent.into(),
        description: description.into(),
        outcomes: outcomes.iter().map(|s| s.to_string()).collect(),
    }
}

fn builtin_services() -> Vec<Service> {
    vec![
        service(
            "ielts",
            "IELTS Instructor",
            "fas fa-language",
            "goldenrod",
            "Comprehensive IELTS preparation with personalized strategies for all four skills: Reading, Writing, Listening, and Speaking.",
            &[
                "Average score improvement: 1.5 bands",
                "95% student satisfaction rate",
                "Flexible online/offline sessions",
            ],
        ),
        service(
            "python",
            "Python Teacher",
            "fab fa-python",
            "royal",
            "From beginner to advanced Python programming, including data science libraries and machine learning applications.",
            &[
                "Hands-on project-based learning",
                "Industry-relevant skills",
                "Career transition support",
            ],
        ),
        service(
            "data-scientist",
            "Data Scientist",
            "fas fa-chart-line",
            "midnight",
            "End-to-end data science solutions including predictive modeling, machine learning, and statistical analysis.",
            &[
                "Custom ML model development",
                "Data-driven insights",
                "Scalable solutions",
            ],
        ),
        service(
            "data-analyst",
            "Data Analyst",
            "fas fa-database",
            "slate",
            "Comprehensive data analysis, visualization, and reporting to drive informed business decisions.",
            &[
                "Interactive dashboards",
                "Actionable insights",
                "Performance optimization",
            ],
        ),
    ]
}

fn project(title: &str, link: &str, description: &str, tools: &[&str]) -> Project {
    Project {
        title: title.into(),
        link: link.into(),
        description: vec![description.into()],
        tools: tools.iter().map(|s| s.to_string()).collect(),
    }
}

fn builtin_projects() -> Vec<Project> {
    vec![
        project(
            "Cat vs Dogs Image Classification Using CNN",
            "https://github.com/Abir0606/Cats-vs.-Dogs-Image-Classification-with-Convolutional-Neural-Network",
            "Developed a CNN model to classify images between cats and dogs with test images",
            &["Python", "NumPy", "Keras"],
        ),
        project(
            "Brain Tumor Classification using CNN",
            "https://github.com/Abir0606/Brain-Tumor-Classification-using-CNN",
            "Built an ML model to classify brain tumors into 4 classes and tested the model with confidence scoring",
            &["Python", "NumPy", "Keras", "TensorFlow"],
        ),
        project(
            "House Rent Prediction",
            "https://github.com/Abir0606/House-Rent-Prediction",
            "Applied exploratory data analysis (EDA) to visualize rental trends and used linear regression for prediction",
            &[
                "Python",
                "NumPy",
                "ScikitLearn",
                "Keras",
                "TensorFlow",
                "Linear Regression",
            ],
        ),
        project(
            "SeatFinder \u{2013} Micro Event Ticket Booking",
            "https://github.com/Abir0606/SeatFinder",
            "Developed a micro event ticket booking system with frontend and backend integration",
            &["Django", "HTML", "CSS", "JavaScript"],
        ),
    ]
}
