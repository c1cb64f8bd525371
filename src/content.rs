//! Static tribute content: the hero deck, biography, timeline and awards.
//!
//! Everything here is copy, compiled into the binary. The slideshow core
//! treats the deck as an opaque ordered sequence and never mutates it.

/// One hero slideshow entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    /// Asset file name, resolved against the asset directory.
    pub image: &'static str,
    pub name: &'static str,
    pub designation: &'static str,
    pub quote: &'static str,
}

pub const HERO_SLIDES: [Slide; 6] = [
    Slide {
        image: "hero-1.jpg",
        name: "John Anderson",
        designation: "Visionary Leader & Philanthropist",
        quote: "A life dedicated to making the world a better place",
    },
    Slide {
        image: "hero-2.jpg",
        name: "Celebrating Excellence",
        designation: "50 Years of Inspiration",
        quote: "Every moment a testament to unwavering dedication",
    },
    Slide {
        image: "hero-3.jpg",
        name: "Cherished Memories",
        designation: "A Legacy of Love",
        quote: "Building bridges of hope and unity",
    },
    Slide {
        image: "hero-4.jpg",
        name: "Awards & Recognition",
        designation: "Distinguished Achievements",
        quote: "Excellence recognized across the globe",
    },
    Slide {
        image: "hero-5.jpg",
        name: "The Journey Continues",
        designation: "Path to Greatness",
        quote: "Inspiring generations to dream bigger",
    },
    Slide {
        image: "hero-6.jpg",
        name: "A Moment to Celebrate",
        designation: "Birthday Tribute",
        quote: "Today we honor a life well lived",
    },
];

pub fn hero_deck() -> Vec<Slide> {
    HERO_SLIDES.to_vec()
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Biography {
    pub heading: &'static str,
    pub name: &'static str,
    pub portrait: &'static str,
    pub paragraphs: [&'static str; 3],
    pub stats: [Stat; 3],
    pub quote: &'static str,
    pub attribution: &'static str,
}

pub const BIOGRAPHY: Biography = Biography {
    heading: "About the Legend",
    name: "John Anderson",
    portrait: "portrait.jpg",
    paragraphs: [
        "Born in 1970, John Anderson has spent his life making an indelible \
         mark on the world. From humble beginnings to becoming a distinguished \
         leader, his journey is a testament to perseverance, vision, and \
         unwavering dedication.",
        "With over three decades of pioneering work in technology and \
         philanthropy, John has transformed industries and touched countless \
         lives. His commitment to education, innovation, and social \
         responsibility has earned him recognition worldwide.",
        "Beyond professional achievements, John is a devoted family man, a \
         mentor to many, and a believer in the power of human potential. His \
         legacy continues to inspire future generations to dream bigger and \
         reach higher.",
    ],
    stats: [
        Stat { value: "50+", label: "Years of Excellence" },
        Stat { value: "100+", label: "Awards Received" },
        Stat { value: "1M+", label: "Lives Impacted" },
    ],
    quote: "Success is not measured by what you achieve, but by the lives you \
            touch and the legacy you leave behind.",
    attribution: "- John Anderson",
};

/// Which side of the timeline a milestone card sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

pub struct Milestone {
    pub year: &'static str,
    pub decade: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub side: TimelineSide,
}

pub const MILESTONES: [Milestone; 7] = [
    Milestone {
        year: "1970",
        decade: "1970s",
        title: "The Beginning",
        description: "Born in a small town with big dreams and endless possibilities ahead.",
        side: TimelineSide::Left,
    },
    Milestone {
        year: "1988",
        decade: "1980s",
        title: "Academic Excellence",
        description: "Graduated with honors from prestigious university, laying the foundation for future success.",
        side: TimelineSide::Right,
    },
    Milestone {
        year: "1995",
        decade: "1990s",
        title: "Career Launch",
        description: "Started pioneering work in technology industry, introducing innovative solutions.",
        side: TimelineSide::Left,
    },
    Milestone {
        year: "2005",
        decade: "2000s",
        title: "First Major Recognition",
        description: "Received Industry Leader Award for groundbreaking contributions to technology.",
        side: TimelineSide::Right,
    },
    Milestone {
        year: "2010",
        decade: "2010s",
        title: "Philanthropic Vision",
        description: "Founded charitable organization impacting thousands of lives through education.",
        side: TimelineSide::Left,
    },
    Milestone {
        year: "2018",
        decade: "2010s",
        title: "Global Recognition",
        description: "Honored with Lifetime Achievement Award for dedication to social causes.",
        side: TimelineSide::Right,
    },
    Milestone {
        year: "2023",
        decade: "2020s",
        title: "Continuing Legacy",
        description: "Still inspiring, still leading, still making a difference every single day.",
        side: TimelineSide::Left,
    },
];

pub struct Award {
    pub image: &'static str,
    pub title: &'static str,
    pub year: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub date: &'static str,
}

pub const AWARDS: [Award; 6] = [
    Award {
        image: "award-1.jpg",
        title: "Excellence Trophy",
        year: "2023",
        description: "Prestigious award for outstanding contributions to industry innovation.",
        full_description: "The Excellence Trophy is the highest honor in the technology \
            industry, awarded to individuals who have demonstrated exceptional leadership, \
            innovation, and impact. This recognition celebrates decades of groundbreaking \
            work that has transformed how we approach modern challenges.",
        organization: "Global Tech Alliance",
        location: "San Francisco, CA",
        date: "March 15, 2023",
    },
    Award {
        image: "award-2.jpg",
        title: "Certificate of Excellence",
        year: "2022",
        description: "Recognition for exceptional leadership and social impact.",
        full_description: "This Certificate of Excellence honors sustained commitment to \
            social causes and community development. Awarded by the International \
            Leadership Foundation for making significant contributions to education and \
            empowering underprivileged communities worldwide.",
        organization: "International Leadership Foundation",
        location: "London, UK",
        date: "September 22, 2022",
    },
    Award {
        image: "award-3.jpg",
        title: "Gold Medal of Honor",
        year: "2021",
        description: "Awarded for lifetime achievements in technology and philanthropy.",
        full_description: "The Gold Medal of Honor is bestowed upon visionaries who have \
            dedicated their lives to advancing technology while maintaining a strong \
            commitment to humanitarian causes. This rare distinction recognizes both \
            professional excellence and personal integrity.",
        organization: "World Innovation Council",
        location: "Tokyo, Japan",
        date: "November 8, 2021",
    },
    Award {
        image: "award-4.jpg",
        title: "Innovation Award",
        year: "2020",
        description: "Recognized for pioneering breakthrough solutions in the industry.",
        full_description: "The Innovation Award celebrates those who push boundaries and \
            challenge conventional thinking. This accolade recognizes revolutionary \
            contributions to technological advancement and the development of solutions \
            that have improved lives across the globe.",
        organization: "Tech Innovators Association",
        location: "Berlin, Germany",
        date: "June 10, 2020",
    },
    Award {
        image: "award-5.jpg",
        title: "Lifetime Achievement",
        year: "2019",
        description: "Honoring 50 years of dedication, excellence, and impact.",
        full_description: "The Lifetime Achievement Award is the pinnacle of recognition, \
            celebrating half a century of unwavering dedication to excellence. This honor \
            acknowledges not only professional accomplishments but also the profound and \
            lasting impact on society, culture, and future generations.",
        organization: "International Achievement Society",
        location: "New York, NY",
        date: "December 5, 2019",
    },
    Award {
        image: "award-6.jpg",
        title: "Star of Excellence",
        year: "2018",
        description: "Distinguished recognition for extraordinary leadership qualities.",
        full_description: "The Star of Excellence represents the zenith of leadership \
            recognition. This award honors individuals who have consistently demonstrated \
            exceptional vision, integrity, and the ability to inspire others to achieve \
            greatness while maintaining the highest ethical standards.",
        organization: "Global Leadership Institute",
        location: "Singapore",
        date: "April 18, 2018",
    },
];

pub const JOURNEY_HEADING: &str = "The Journey";
pub const JOURNEY_SUBHEADING: &str = "A timeline of remarkable achievements and memorable milestones";
pub const AWARDS_HEADING: &str = "Awards & Recognition";
pub const AWARDS_SUBHEADING: &str = "A showcase of excellence and distinguished achievements";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_deck_is_populated() {
        let deck = hero_deck();
        assert_eq!(deck.len(), 6);
        for slide in &deck {
            assert!(!slide.image.is_empty());
            assert!(!slide.name.is_empty());
            assert!(!slide.designation.is_empty());
            assert!(!slide.quote.is_empty());
        }
    }

    #[test]
    fn milestones_are_chronological() {
        let years: Vec<i32> = MILESTONES
            .iter()
            .map(|m| m.year.parse().expect("milestone years are numeric"))
            .collect();
        assert!(years.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn awards_carry_detail_copy() {
        for award in &AWARDS {
            assert!(!award.full_description.is_empty());
            assert!(!award.organization.is_empty());
            assert!(!award.date.is_empty());
        }
    }
}
