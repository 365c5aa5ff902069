use crate::catalog::ProjectType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Work,
    Graphics,
    Videos,
    About,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        Self::Home,
        Self::Work,
        Self::Graphics,
        Self::Videos,
        Self::About,
        Self::Contact,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Work => 1,
            Self::Graphics => 2,
            Self::Videos => 3,
            Self::About => 4,
            Self::Contact => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::Graphics => "graphics",
            Self::Videos => "videos",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Work => "WORK",
            Self::Graphics => "GRAPHICS",
            Self::Videos => "VIDEOS",
            Self::About => "ABOUT",
            Self::Contact => "CONTACT",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Home => "Crafting digital experiences",
            Self::Work => "Recent projects",
            Self::Graphics => "Visual identity and print",
            Self::Videos => "Motion and editing",
            Self::About => "The person behind the code",
            Self::Contact => "Let's build something together",
        }
    }

    /// Two-digit, one-based position shown above each section ("01".."06").
    pub fn counter_label(self) -> String {
        format!("{:02}", self.index() + 1)
    }

    pub fn project_type(self) -> Option<ProjectType> {
        match self {
            Self::Work => Some(ProjectType::Website),
            Self::Graphics => Some(ProjectType::Graphic),
            Self::Videos => Some(ProjectType::Video),
            Self::Home | Self::About | Self::Contact => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_declaration_order() {
        for (position, section) in SectionId::ALL.into_iter().enumerate() {
            assert_eq!(section.index(), position);
            assert_eq!(SectionId::from_index(position), Some(section));
        }
        assert_eq!(SectionId::from_index(SectionId::ALL.len()), None);
    }

    #[test]
    fn counter_labels_are_one_based() {
        assert_eq!(SectionId::Home.counter_label(), "01");
        assert_eq!(SectionId::Contact.counter_label(), "06");
    }

    #[test]
    fn only_showcase_sections_carry_projects() {
        assert_eq!(SectionId::Work.project_type(), Some(ProjectType::Website));
        assert_eq!(SectionId::Videos.project_type(), Some(ProjectType::Video));
        assert_eq!(SectionId::About.project_type(), None);
    }
}
