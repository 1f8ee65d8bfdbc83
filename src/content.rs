use std::time::Duration;

use url::form_urlencoded::byte_serialize;

pub const OWNER_NAME: &str = "Amit";
pub const OWNER_FULL_NAME: &str = "Amit Kumar";
pub const CONTACT_EMAIL: &str = "imamit0311@gmail.com";
pub const CONTACT_PHONE: &str = "+91 9523690955";
pub const CONTACT_PHONE_HREF: &str = "tel:+919523690955";
pub const GITHUB_URL: &str = "https://github.com/amit-kumar-11";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/amitkumarfd03";
pub const SOURCE_REPOSITORY: &str = "github.com/amit-kumar-11/portfolio";
pub const RESUME_PATH: &str = "/assets/resume.pdf";
pub const LOCATION: &str = "West Bengal, India";
pub const MUSIC_EMBED_URL: &str =
    "https://open.spotify.com/embed/track/0tgVpDi06FyKpA1z0VMD4v?utm_source=generator";
pub const TAGLINE_PERIOD: Duration = Duration::from_secs(3);

pub const NAV_ITEMS: [&str; 4] = ["About", "Projects", "Experience", "Contact"];

pub const HERO_TAGLINES: [&str; 3] = [
    "I build React apps and enjoy solving complex problems",
    "Thought I'd be debugging forever, now I architect solutions",
    "Frontend developer, coffee enthusiast, and optimization geek",
];

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "From Computer Science student to Full-Stack innovator, I'm passionate about creating \
     digital experiences that users love. Currently exploring AI integration, advanced \
     React patterns, and Web3 technologies.",
    "I believe in writing clean, maintainable code and creating interfaces that are both \
     beautiful and functional. When I'm not coding, you'll find me exploring new technologies, \
     contributing to open source, or enjoying a perfect cup of coffee.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const ABOUT_STATS: [Stat; 4] = [
    Stat { value: "8+", label: "Projects shipped" },
    Stat { value: "4", label: "Roles held" },
    Stat { value: "15+", label: "Technologies" },
    Stat { value: "∞", label: "Cups of coffee" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub year: &'static str,
    pub github: &'static str,
    pub live: &'static str,
}

pub const PROJECTS: [Project; 8] = [
    Project {
        title: "AI Resume Builder",
        subtitle: "Intelligent Resume Generation",
        description: "AI-powered resume creation with real-time preview and ATS optimization. \
                      Features include intelligent suggestions, multiple templates, and professional formatting.",
        tech_stack: &["React", "Vite", "CSS", "AI API"],
        year: "2024",
        github: "https://github.com/amit-kumar-11/AIRESUMEBuilder",
        live: "https://ai-resume-builder-one-neon.vercel.app/",
    },
    Project {
        title: "E-Commerce Platform",
        subtitle: "Full-Stack Shopping Experience",
        description: "Complete e-commerce solution with user authentication, product management, \
                      shopping cart, and payment integration.",
        tech_stack: &["React", "Node.js", "MongoDB", "Stripe"],
        year: "2024",
        github: "https://github.com/amit-kumar-11/E-commerce-Store",
        live: "https://e-commerce-store-nu-red.vercel.app/",
    },
    Project {
        title: "Smart Home Dashboard",
        subtitle: "IoT Control Interface",
        description: "Intuitive dashboard for controlling smart home devices with real-time status \
                      updates and automation rules.",
        tech_stack: &["React", "TypeScript", "IoT APIs", "Chart.js"],
        year: "2024",
        github: "https://github.com/amit-kumar-11/Smart-Home-Dashboard",
        live: "https://smart-home-dashboard-beta.vercel.app/",
    },
    Project {
        title: "Weather App",
        subtitle: "Real-Time Climate Insights",
        description: "Weather application with detailed forecasts, interactive maps, and \
                      location-based recommendations.",
        tech_stack: &["React", "Weather API", "CSS", "Geolocation"],
        year: "2024",
        github: "https://github.com/amit-kumar-11/Weather-App",
        live: "https://weather-app-ten-pi-11.vercel.app/",
    },
    Project {
        title: "Trip Planner",
        subtitle: "Adventure Organization Tool",
        description: "Trip planning application with itinerary management, budget tracking, and \
                      collaboration features.",
        tech_stack: &["React", "Firebase", "Maps API", "Tailwind"],
        year: "2024",
        github: "https://github.com/amit-kumar-11/Trip-Planner",
        live: "https://trip-planner-orcin-beta.vercel.app/",
    },
    Project {
        title: "Quiz Platform",
        subtitle: "Interactive Learning System",
        description: "Educational quiz platform with real-time scoring, progress tracking, and \
                      adaptive difficulty adjustment.",
        tech_stack: &["React", "Python", "PostgreSQL", "WebSocket"],
        year: "2024",
        github: "https://github.com/amit-kumar-11/online-quiz-platform",
        live: "https://online-quiz-platform-mu.vercel.app/",
    },
    Project {
        title: "100 Years Calendar",
        subtitle: "Time Navigation Interface",
        description: "Calendar application spanning 100 years with event management and \
                      historical date exploration.",
        tech_stack: &["React", "Date-fns", "CSS Grid", "Local Storage"],
        year: "2023",
        github: "https://github.com/amit-kumar-11/100_Year-s_calander",
        live: "https://100-year-s-calander.vercel.app/",
    },
    Project {
        title: "Historical Timeline",
        subtitle: "Interactive History Explorer",
        description: "Visual timeline of historical events with interactive exploration and \
                      detailed event information.",
        tech_stack: &["React", "D3.js", "API Integration", "Animation"],
        year: "2023",
        github: "https://github.com/amit-kumar-11/MileStones-That_Made_History",
        live: "https://mile-stones-that-made-history.vercel.app/",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Self::Blue => "accent-blue",
            Self::Green => "accent-green",
            Self::Purple => "accent-purple",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "Frontend Mastery",
        icon: "⚛️",
        accent: Accent::Blue,
        skills: &["React.js", "TypeScript", "JavaScript", "Tailwind CSS", "Next.js", "Framer Motion"],
    },
    SkillCategory {
        title: "Backend Expertise",
        icon: "🔧",
        accent: Accent::Green,
        skills: &["Python", "Java", "Node.js", "REST APIs", "Database Design"],
    },
    SkillCategory {
        title: "Development Tools",
        icon: "🛠️",
        accent: Accent::Purple,
        skills: &["Git", "Vite", "VS Code", "Figma", "Chrome DevTools"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCES: [Experience; 4] = [
    Experience {
        role: "Frontend Developer",
        company: "Nexforge Studio",
        period: "Feb 2025 – Present",
        description: "Contributing to a digital craftsmanship agency, creating web applications and \
                      social media tools with end-to-end full-stack development.",
    },
    Experience {
        role: "Full Stack Developer",
        company: "Byteforge Titans",
        period: "Jan 2025 – Present",
        description: "Working on projects across AI, Web3, IoT, and full-stack innovations with a \
                      dynamic tech team.",
    },
    Experience {
        role: "Java Developer Intern",
        company: "Codec Technologies",
        period: "June – July 2024",
        description: "Built backend modules and systems using Java and JDBC during a one-month \
                      hands-on internship program.",
    },
    Experience {
        role: "Frontend Developer Intern",
        company: "CodeAlpha",
        period: "July – August 2024",
        description: "Specialized in responsive UI development with React and Tailwind CSS. \
                      Received a Letter of Recommendation for outstanding contribution.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        label: CONTACT_EMAIL,
        href: "mailto:imamit0311@gmail.com",
        icon: "✉",
    },
    ContactChannel {
        label: CONTACT_PHONE,
        href: CONTACT_PHONE_HREF,
        icon: "☎",
    },
    ContactChannel {
        label: "GitHub Profile",
        href: GITHUB_URL,
        icon: "⌥",
    },
    ContactChannel {
        label: "LinkedIn Profile",
        href: LINKEDIN_URL,
        icon: "in",
    },
];

pub fn developer_greeting() -> String {
    format!(
        "Hey fellow developer! Checking out the code? Want to work together? \
         Drop me a line: {CONTACT_EMAIL}. Star this project: {SOURCE_REPOSITORY}"
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaglineRotation {
    index: usize,
    len: usize,
}

impl TaglineRotation {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn advance(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactFormError {
    MissingName,
    InvalidEmail,
    MissingMessage,
}

impl ContactFormError {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingName => "Please tell me your name.",
            Self::InvalidEmail => "Please enter a valid email address.",
            Self::MissingMessage => "Please tell me a little about your project.",
        }
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.trim().is_empty() {
            return Err(ContactFormError::MissingName);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactFormError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactFormError::MissingMessage);
        }
        Ok(())
    }

    pub fn mailto_href(&self) -> Result<String, ContactFormError> {
        self.validate()?;

        let project_type = self.project_type.trim();
        let subject = if project_type.is_empty() {
            format!("Portfolio enquiry from {}", self.name.trim())
        } else {
            format!("{project_type} enquiry from {}", self.name.trim())
        };
        let body = format!(
            "{}\n\n{} <{}>",
            self.message.trim(),
            self.name.trim(),
            self.email.trim()
        );

        Ok(format!(
            "mailto:{CONTACT_EMAIL}?subject={}&body={}",
            encode_component(&subject),
            encode_component(&body)
        ))
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !value.chars().any(char::is_whitespace)
}

// Mail clients read `+` literally, so spaces go out as `%20`. A literal plus
// is already escaped to `%2B` by the serializer.
fn encode_component(value: &str) -> String {
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            project_type: "Web app".to_string(),
            message: "Build me an engine & a site + docs".to_string(),
        }
    }

    #[test]
    fn rotation_wraps_around() {
        let mut rotation = TaglineRotation::new(HERO_TAGLINES.len());
        assert_eq!(rotation.current(), Some(0));
        assert_eq!(rotation.advance(), Some(1));
        assert_eq!(rotation.advance(), Some(2));
        assert_eq!(rotation.advance(), Some(0));
    }

    #[test]
    fn empty_rotation_has_no_tagline() {
        let mut rotation = TaglineRotation::new(0);
        assert_eq!(rotation.current(), None);
        assert_eq!(rotation.advance(), None);
    }

    #[test]
    fn form_validation_reports_first_problem() {
        let mut form = filled_form();
        assert_eq!(form.validate(), Ok(()));

        form.message = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactFormError::MissingMessage));

        form.email = "ada@localhost".to_string();
        assert_eq!(form.validate(), Err(ContactFormError::InvalidEmail));

        form.name = String::new();
        assert_eq!(form.validate(), Err(ContactFormError::MissingName));
    }

    #[test]
    fn email_shape_checks() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@.co"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("a@@b.co"));
        assert!(!looks_like_email("a b@c.io"));
    }

    #[test]
    fn mailto_encodes_spaces_and_reserved_characters() {
        let href = filled_form().mailto_href().expect("valid form");

        assert!(href.starts_with("mailto:imamit0311@gmail.com?subject=Web%20app%20enquiry%20from%20Ada%20Lovelace&body="));
        assert!(href.contains("engine%20%26%20a%20site%20%2B%20docs"));
        assert!(href.contains("%0A%0AAda%20Lovelace%20%3Cada%40example.com%3E"));
        assert!(!href.contains('+'));
    }

    #[test]
    fn mailto_without_project_type_uses_generic_subject() {
        let mut form = filled_form();
        form.project_type = " ".to_string();

        let href = form.mailto_href().expect("valid form");
        assert!(href.contains("subject=Portfolio%20enquiry%20from%20Ada%20Lovelace"));
    }

    #[test]
    fn invalid_form_has_no_mailto() {
        let form = ContactForm::default();
        assert_eq!(form.mailto_href(), Err(ContactFormError::MissingName));
    }

    #[test]
    fn content_tables_are_populated() {
        assert_eq!(PROJECTS.len(), 8);
        assert!(PROJECTS.iter().all(|project| project.github.starts_with("https://")));
        assert!(SKILL_CATEGORIES.iter().all(|category| !category.skills.is_empty()));
        assert!(developer_greeting().contains(CONTACT_EMAIL));
    }
}
