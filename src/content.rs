pub const OWNER: &str = "Harini Ganesula";
pub const RESUME_PATH: &str = "/resume.pdf";
pub const RESUME_DOWNLOAD_NAME: &str = "Harini_Ganesula_Resume.pdf";
pub const PROFILE_IMAGE: &str = "/profile-picture.jpg";
pub const PROFILE_FALLBACK: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='384' height='384' viewBox='0 0 24 24' fill='none' stroke='%234ade80' stroke-width='1' stroke-linecap='round' stroke-linejoin='round'%3E%3Cpath d='M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2'/%3E%3Ccircle cx='12' cy='7' r='4'/%3E%3C/svg%3E";
pub const EMAIL: &str = "gsahara2207@gmail.com";
pub const LOCATION: &str = "Hyderabad, Telangana";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

pub const GITHUB: SocialLink = SocialLink {
    label: "GitHub",
    href: "https://github.com/gsahara2007",
};
pub const LINKEDIN: SocialLink = SocialLink {
    label: "LinkedIn",
    href: "https://www.linkedin.com/in/harini-ganesula-55a1aa2a5",
};
pub const TWITTER: SocialLink = SocialLink {
    label: "Twitter",
    href: "https://twitter.com/harini_ganesula",
};
pub const MAIL: SocialLink = SocialLink {
    label: "Email",
    href: "mailto:gsahara2207@gmail.com",
};

pub static HERO_SOCIALS: [SocialLink; 3] = [GITHUB, LINKEDIN, MAIL];
pub static CONTACT_SOCIALS: [SocialLink; 3] = [GITHUB, LINKEDIN, TWITTER];
pub static FOOTER_SOCIALS: [SocialLink; 4] = [GITHUB, LINKEDIN, TWITTER, MAIL];

pub struct ContactInfo {
    pub title: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub static CONTACT_INFO: [ContactInfo; 3] = [
    ContactInfo {
        title: "Email",
        value: EMAIL,
        href: "mailto:gsahara2207@gmail.com",
    },
    ContactInfo {
        title: "Phone",
        value: "+91 87121xxxxx",
        href: "tel:+9187121xxxxx",
    },
    ContactInfo {
        title: "Location",
        value: LOCATION,
        href: "#",
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat { value: "8.6", label: "GPA" },
    Stat { value: "4+", label: "Internships" },
    Stat { value: "6+", label: "Projects" },
    Stat { value: "2025", label: "Graduation" },
];

pub struct Education {
    pub school: &'static str,
    pub program: &'static str,
    pub years: &'static str,
    pub score: &'static str,
}

pub static EDUCATION: [Education; 2] = [
    Education {
        school: "GITAM University",
        program: "B.Tech in Computer Science and Engineering",
        years: "2021 - 2025",
        score: "GPA: 8.6/10",
    },
    Education {
        school: "Sri Chaitanya Junior College",
        program: "MPC, IPE Education",
        years: "2019 - 2021",
        score: "Percentage: 86.8%",
    },
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [Feature; 6] = [
    Feature {
        icon: "</>",
        title: "Clean Code",
        description: "Writing maintainable, scalable code that stands the test of time",
    },
    Feature {
        icon: "🎨",
        title: "Creative Design",
        description: "Crafting beautiful, intuitive interfaces that users love to interact with",
    },
    Feature {
        icon: "⚡",
        title: "Performance",
        description: "Optimizing for speed and efficiency to deliver exceptional user experiences",
    },
    Feature {
        icon: "👥",
        title: "Collaboration",
        description: "Working effectively with teams to bring ideas to life",
    },
    Feature {
        icon: "🏆",
        title: "Results Driven",
        description: "Focused on delivering measurable outcomes that exceed expectations",
    },
    Feature {
        icon: "♥",
        title: "Passion",
        description: "Genuinely excited about creating technology that makes a difference",
    },
];

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub color: &'static str,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: [Skill; 4],
}

const fn skill(name: &'static str, level: u8, color: &'static str) -> Skill {
    Skill { name, level, color }
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "AI/ML & Data Science",
        skills: [
            skill("Machine Learning", 85, "blue"),
            skill("NLP", 75, "green"),
            skill("Data Analysis", 82, "purple"),
            skill("WEKA", 70, "indigo"),
        ],
    },
    SkillCategory {
        title: "Web Development",
        skills: [
            skill("HTML/CSS", 85, "red"),
            skill("TypeScript", 80, "yellow"),
            skill("Javascript", 75, "blue"),
            skill("React", 82, "cyan"),
        ],
    },
    SkillCategory {
        title: "Programming Languages",
        skills: [
            skill("Python", 85, "yellow"),
            skill("Java", 75, "red"),
            skill("C", 70, "blue"),
            skill("SQL", 80, "green"),
        ],
    },
    SkillCategory {
        title: "Tools & Frameworks",
        skills: [
            skill("Git", 75, "orange"),
            skill("Algorithm Design", 80, "purple"),
            skill("Data Structures", 82, "pink"),
            skill("Problem Solving", 85, "indigo"),
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectCategory {
    Ai,
    Data,
    Web,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::Only(ProjectCategory::Ai),
        ProjectFilter::Only(ProjectCategory::Data),
        ProjectFilter::Only(ProjectCategory::Web),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(ProjectCategory::Ai) => "AI/ML",
            Self::Only(ProjectCategory::Data) => "Data Analysis",
            Self::Only(ProjectCategory::Web) => "Web Development",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::All => "🎯",
            Self::Only(ProjectCategory::Ai) => "🤖",
            Self::Only(ProjectCategory::Data) => "📊",
            Self::Only(ProjectCategory::Web) => "🌐",
        }
    }

    pub fn matches(self, category: ProjectCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: [&'static str; 4],
    pub category: ProjectCategory,
    pub demo_url: &'static str,
    pub code_url: &'static str,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "AI Driven Chatbot on Food Systems",
        description: "An intelligent chatbot system designed to provide information and assistance related to food systems, nutrition, and dietary recommendations using natural language processing.",
        image: "https://images.unsplash.com/photo-1589254065878-42c9da997008?auto=format&fit=crop&w=600&h=400",
        tags: ["AI", "NLP", "Python", "Machine Learning"],
        category: ProjectCategory::Ai,
        demo_url: "#",
        code_url: "#",
    },
    Project {
        id: 2,
        title: "IPL Cricket Players Data Analysis",
        description: "Comprehensive data analysis of IPL cricket players including detailed statistics on runs, wickets, and match performance. Features interactive visualizations and performance insights.",
        image: "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?auto=format&fit=crop&w=600&h=400",
        tags: ["Data Analysis", "Python", "Statistics", "Visualization"],
        category: ProjectCategory::Data,
        demo_url: "#",
        code_url: "#",
    },
    Project {
        id: 3,
        title: "Currency Converter",
        description: "A real-time currency conversion application that allows users to convert amounts between different currencies with live exchange rates and historical data.",
        image: "https://images.unsplash.com/photo-1559526324-4b87b5e36e44?auto=format&fit=crop&w=600&h=400",
        tags: ["JavaScript", "API", "Web App", "Real-time"],
        category: ProjectCategory::Web,
        demo_url: "#",
        code_url: "#",
    },
    Project {
        id: 4,
        title: "Student Attendance Portal",
        description: "A comprehensive web-based portal for tracking student attendance with day-wise records, performance analytics, and visual indicators using different colors for attendance status.",
        image: "https://images.unsplash.com/photo-1434030216411-0b793f4b4173?auto=format&fit=crop&w=600&h=400",
        tags: ["Web Development", "MySQL", "PHP", "Dashboard"],
        category: ProjectCategory::Web,
        demo_url: "#",
        code_url: "#",
    },
    Project {
        id: 5,
        title: "Automated Student Council Interaction System",
        description: "A dynamic student council web application built with modern web technologies and MySQL database for enhanced user interaction and council management.",
        image: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?auto=format&fit=crop&w=600&h=400",
        tags: ["Web Technologies", "MySQL", "Interactive", "Student Portal"],
        category: ProjectCategory::Web,
        demo_url: "#",
        code_url: "#",
    },
    Project {
        id: 6,
        title: "Machine Learning Credit Card Analysis",
        description: "Research project analyzing credit card transactions using machine learning techniques including decision trees, random forests, and neural networks for fraud detection.",
        image: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?auto=format&fit=crop&w=600&h=400",
        tags: ["Machine Learning", "Python", "Data Science", "Neural Networks"],
        category: ProjectCategory::Ai,
        demo_url: "#",
        code_url: "#",
    },
];

pub fn filter_projects(filter: ProjectFilter) -> impl Iterator<Item = &'static Project> {
    PROJECTS
        .iter()
        .filter(move |project| filter.matches(project.category))
}

pub struct Internship {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub logo: &'static str,
}

pub static INTERNSHIPS: [Internship; 4] = [
    Internship {
        title: "Credit Card Fraud Detection",
        company: "IIT Hyderabad",
        duration: "Dec 2023 - Jan 2024",
        description: "ML techniques: Decision Trees, Random Forests, Neural Networks",
        logo: "/iith.png",
    },
    Internship {
        title: "AI Application using WEKA",
        company: "DRDL",
        duration: "Nov 2023 - Dec 2023",
        description: "ML Algorithms, AI Techniques, Data Interpretation",
        logo: "/drdo.png",
    },
    Internship {
        title: "Google AI-ML Virtual Intern",
        company: "AICTE",
        duration: "Sep 2023 - Oct 2023",
        description: "ML, NLP Algorithm Design, TensorFlow Proficiency",
        logo: "/aicte.png",
    },
    Internship {
        title: "Front-End Dev Real Time Project",
        company: "IBM",
        duration: "Jul 2023 - Aug 2023",
        description: "MySQL, HTML/CSS",
        logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/5/51/IBM_logo.svg/1200px-IBM_logo.svg.png",
    },
];

pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub static CERTIFICATIONS: [Certification; 4] = [
    Certification {
        title: "AI&ML with Data Science Workshop",
        issuer: "IIT Hyderabad",
        year: "2024",
        description: "Comprehensive workshop on AI/ML and data science fundamentals",
        icon: "🎓",
    },
    Certification {
        title: "Research opportunities in Computer Science (ROCS)",
        issuer: "IIT Hyderabad",
        year: "2024",
        description: "Advanced research methodologies in computer science",
        icon: "🔬",
    },
    Certification {
        title: "Research data in Generative AI",
        issuer: "IIT Hyderabad",
        year: "2024",
        description: "Cutting-edge research in generative artificial intelligence",
        icon: "🤖",
    },
    Certification {
        title: "The Bits and Bytes of Computer Networking",
        issuer: "Google",
        year: "2024",
        description: "Comprehensive understanding of computer networking fundamentals",
        icon: "🌐",
    },
];

/// Shown in place of a company logo that failed to load.
pub fn initials(company: &str) -> String {
    company
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

pub static TYPEWRITER_PHRASES: [&str; 3] = [OWNER, "a Developer", "a Designer"];
pub const TYPEWRITER_TICK_MS: u32 = 50;
pub const TYPEWRITER_HOLD_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TypePhase {
    Typing,
    Holding { waited_ms: u32 },
    Erasing,
}

// Erases back to the prefix shared with the next phrase, not to empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    shown: usize,
    phase: TypePhase,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            index: 0,
            shown: 0,
            phase: TypePhase::Typing,
        }
    }

    fn phrase(&self) -> &'static str {
        self.phrases.get(self.index).copied().unwrap_or_default()
    }

    fn next_index(&self) -> usize {
        (self.index + 1) % self.phrases.len().max(1)
    }

    fn shared_prefix_with_next(&self) -> usize {
        let next = self.phrases.get(self.next_index()).copied().unwrap_or_default();
        self.phrase()
            .chars()
            .zip(next.chars())
            .take_while(|(a, b)| a == b)
            .count()
    }

    pub fn text(&self) -> String {
        self.phrase().chars().take(self.shown).collect()
    }

    pub fn tick(&mut self) {
        let length = self.phrase().chars().count();
        let phase = self.phase;

        self.phase = match phase {
            TypePhase::Typing if self.shown < length => {
                self.shown += 1;
                TypePhase::Typing
            }
            TypePhase::Typing => TypePhase::Holding { waited_ms: 0 },
            TypePhase::Holding { waited_ms } if waited_ms + TYPEWRITER_TICK_MS < TYPEWRITER_HOLD_MS => {
                TypePhase::Holding {
                    waited_ms: waited_ms + TYPEWRITER_TICK_MS,
                }
            }
            TypePhase::Holding { .. } => TypePhase::Erasing,
            TypePhase::Erasing if self.shown > self.shared_prefix_with_next() => {
                self.shown -= 1;
                TypePhase::Erasing
            }
            TypePhase::Erasing => {
                self.index = self.next_index();
                TypePhase::Typing
            }
        };
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(&TYPEWRITER_PHRASES)
    }
}
