//! Static sample content for the celebration sections.

pub struct Couple {
    pub bride: &'static str,
    pub groom: &'static str,
    pub date: &'static str,
    pub venue: &'static str,
    pub tagline: &'static str,
}

pub const COUPLE: Couple = Couple {
    bride: "Priya Sharma",
    groom: "Arjun Patel",
    date: "March 15, 2025",
    venue: "The Grand Palace, Mumbai",
    tagline: "Two hearts, two families, one beautiful journey",
};

pub struct FamilyStory {
    pub name: &'static str,
    pub origin: &'static str,
    pub story: &'static str,
    pub traditions: &'static [&'static str],
}

pub const FAMILY_STORIES: &[FamilyStory] = &[
    FamilyStory {
        name: "Priya's Heritage",
        origin: "Rajasthan, India",
        story: "Born into a family of artisans and storytellers, Priya carries forward the rich \
                traditions of Rajasthani culture. Her grandmother's tales of desert kingdoms and \
                vibrant festivals shaped her love for heritage and celebration.",
        traditions: &[
            "Mehendi ceremonies",
            "Traditional folk dances",
            "Rajasthani cuisine",
        ],
    },
    FamilyStory {
        name: "Arjun's Legacy",
        origin: "Gujarat, India",
        story: "Arjun's family has been guardians of Gujarati business traditions for \
                generations. His father's teachings about community, prosperity, and celebration \
                have instilled in him a deep respect for cultural values.",
        traditions: &["Garba dancing", "Business ethics", "Gujarati hospitality"],
    },
];

pub struct Ceremony {
    pub name: &'static str,
    pub native_name: &'static str,
    pub when: &'static str,
    pub description: &'static str,
}

pub const CEREMONIES: &[Ceremony] = &[
    Ceremony {
        name: "Mehendi Ceremony",
        native_name: "मेहंदी",
        when: "Day 1 - Evening",
        description: "Intricate henna designs are applied to the bride's hands and feet while \
                      family shares stories and songs.",
    },
    Ceremony {
        name: "Sangeet Night",
        native_name: "संगीत",
        when: "Day 2 - Evening",
        description: "An evening of music and dance with performances by both families.",
    },
    Ceremony {
        name: "Haldi Ceremony",
        native_name: "हल्दी",
        when: "Day 3 - Morning",
        description: "Turmeric paste is applied by family members to bless the couple with good \
                      fortune.",
    },
    Ceremony {
        name: "Wedding Ceremony",
        native_name: "विवाह",
        when: "Day 3 - Evening",
        description: "Sacred vows and the seven circles around the holy fire.",
    },
    Ceremony {
        name: "Reception",
        native_name: "स्वागत",
        when: "Day 4 - Evening",
        description: "The newlyweds are introduced with dinner, dancing, and festivities.",
    },
];

pub struct TimelineEvent {
    pub time: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

pub struct TimelineDay {
    pub label: &'static str,
    pub date: &'static str,
    pub events: &'static [TimelineEvent],
}

pub const TIMELINE: &[TimelineDay] = &[
    TimelineDay {
        label: "Day 1",
        date: "March 13, 2025",
        events: &[
            TimelineEvent {
                time: "4:00 PM",
                title: "Mehendi Ceremony",
                location: "Sharma Family Home",
                description: "Intimate henna ceremony with close family and friends",
            },
            TimelineEvent {
                time: "7:00 PM",
                title: "Mehendi Dinner",
                location: "Garden Terrace",
                description: "Traditional dinner with folk music and storytelling",
            },
        ],
    },
    TimelineDay {
        label: "Day 2",
        date: "March 14, 2025",
        events: &[
            TimelineEvent {
                time: "6:00 PM",
                title: "Sangeet Night",
                location: "Grand Ballroom, Hotel Majestic",
                description: "Musical evening with dance performances by both families",
            },
            TimelineEvent {
                time: "9:00 PM",
                title: "Sangeet Dinner",
                location: "Hotel Majestic",
                description: "Festive dinner with live music and dancing",
            },
        ],
    },
    TimelineDay {
        label: "Day 3 - Wedding Day",
        date: "March 15, 2025",
        events: &[
            TimelineEvent {
                time: "8:00 AM",
                title: "Haldi Ceremony",
                location: "Both Family Homes",
                description: "Turmeric ceremony for bride and groom separately",
            },
            TimelineEvent {
                time: "6:00 PM",
                title: "Baraat Arrival",
                location: "The Grand Palace",
                description: "Groom's procession with horse and band",
            },
            TimelineEvent {
                time: "7:00 PM",
                title: "Wedding Ceremony",
                location: "Main Hall, The Grand Palace",
                description: "Sacred marriage ceremony with traditional rituals",
            },
            TimelineEvent {
                time: "10:00 PM",
                title: "Wedding Dinner",
                location: "The Grand Palace",
                description: "Celebration dinner with family and friends",
            },
        ],
    },
    TimelineDay {
        label: "Day 4",
        date: "March 16, 2025",
        events: &[
            TimelineEvent {
                time: "7:00 PM",
                title: "Reception",
                location: "Crystal Ballroom, Hotel Regency",
                description: "Grand reception for extended family and friends",
            },
            TimelineEvent {
                time: "9:00 PM",
                title: "Reception Dinner",
                location: "Hotel Regency",
                description: "Elegant dinner with speeches and entertainment",
            },
        ],
    },
];

pub struct GalleryItem {
    pub title: &'static str,
    pub category: &'static str,
}

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem { title: "Our Engagement", category: "couple" },
    GalleryItem { title: "Sharma Family", category: "bride" },
    GalleryItem { title: "Patel Family", category: "groom" },
    GalleryItem { title: "Traditional Rituals", category: "ceremony" },
    GalleryItem { title: "Mehendi Night", category: "ceremony" },
    GalleryItem { title: "Our Grandparents", category: "generations" },
    GalleryItem { title: "Pre-wedding Shoot", category: "couple" },
    GalleryItem { title: "Wedding Preparations", category: "ceremony" },
    GalleryItem { title: "Three Generations", category: "generations" },
];

pub struct Tradition {
    pub title: &'static str,
    pub description: &'static str,
    pub etiquette: &'static [&'static str],
}

pub const TRADITIONS: &[Tradition] = &[
    Tradition {
        title: "Mehendi Ceremony",
        description: "A joyous pre-wedding celebration where intricate henna designs are applied \
                      to the bride's hands and feet. The deeper the color, the more the groom is \
                      said to love his bride.",
        etiquette: &["Participate in singing traditional songs"],
    },
    Tradition {
        title: "Sangeet Night",
        description: "A vibrant celebration filled with music, dance, and performances by both \
                      families.",
        etiquette: &["Dress in traditional or fusion wear"],
    },
    Tradition {
        title: "Haldi Ceremony",
        description: "A purifying ceremony where turmeric paste is applied to the bride and groom \
                      by family members to cleanse and bless the couple.",
        etiquette: &[
            "Wear old clothes that can get stained",
            "Yellow-themed clothing is preferred",
        ],
    },
    Tradition {
        title: "Wedding Ceremony",
        description: "Sacred rituals including the Saat Phere (seven vows) around the sacred \
                      fire, exchange of garlands, and the tying of the mangalsutra.",
        etiquette: &[
            "Dress in traditional Indian attire",
            "Maintain silence during sacred rituals",
        ],
    },
    Tradition {
        title: "Reception",
        description: "A grand celebration where the newlyweds are formally introduced to \
                      extended family and friends, with dinner, speeches, and dancing.",
        etiquette: &[
            "Dress in formal or semi-formal attire",
            "Bring gifts for the couple",
        ],
    },
];

pub struct PartyMember {
    pub name: &'static str,
    pub role: &'static str,
    pub relation: &'static str,
    pub outfit: &'static str,
}

pub const BRIDE_SIDE: &[PartyMember] = &[
    PartyMember {
        name: "Meera Sharma",
        role: "Maid of Honor",
        relation: "Sister",
        outfit: "Pink silk saree with traditional jewelry",
    },
    PartyMember {
        name: "Kavya Reddy",
        role: "Bridesmaid",
        relation: "Best Friend",
        outfit: "Turquoise lehenga with mirror work",
    },
    PartyMember {
        name: "Anjali Gupta",
        role: "Bridesmaid",
        relation: "Cousin",
        outfit: "Orange silk saree with gold border",
    },
];

pub const GROOM_SIDE: &[PartyMember] = &[
    PartyMember {
        name: "Rohan Patel",
        role: "Best Man",
        relation: "Brother",
        outfit: "Navy blue sherwani with gold buttons",
    },
    PartyMember {
        name: "Vikram Singh",
        role: "Groomsman",
        relation: "Best Friend",
        outfit: "Maroon kurta with cream dhoti",
    },
    PartyMember {
        name: "Aditya Joshi",
        role: "Groomsman",
        relation: "Cousin",
        outfit: "Green silk kurta with gold embroidery",
    },
];

pub struct RsvpEvent {
    pub name: &'static str,
    pub date: &'static str,
}

pub const RSVP_EVENTS: &[RsvpEvent] = &[
    RsvpEvent { name: "Mehendi Ceremony", date: "March 13" },
    RsvpEvent { name: "Sangeet Night", date: "March 14" },
    RsvpEvent { name: "Haldi Ceremony", date: "March 15" },
    RsvpEvent { name: "Wedding Ceremony", date: "March 15" },
    RsvpEvent { name: "Reception", date: "March 16" },
];

pub const DIETARY_OPTIONS: &[&str] = &[
    "Vegetarian",
    "Vegan",
    "Gluten-free",
    "No dietary restrictions",
    "Other (please specify)",
];

pub struct Blessing {
    pub name: &'static str,
    pub location: &'static str,
    pub language: &'static str,
    pub message: &'static str,
}

pub const BLESSINGS: &[Blessing] = &[
    Blessing {
        name: "Sarah Johnson",
        location: "New York, USA",
        language: "en",
        message: "Wishing you both a lifetime of love and happiness! Can't wait to celebrate \
                  with you.",
    },
    Blessing {
        name: "राज शर्मा",
        location: "Mumbai, India",
        language: "hi",
        message: "आपके नए जीवन की शुरुआत के लिए हार्दिक शुभकामनाएं! भगवान आपको हमेशा खुश रखे।",
    },
    Blessing {
        name: "李小明",
        location: "Beijing, China",
        language: "zh",
        message: "祝愿你们新婚快乐，白头偕老！期待参加你们的婚礼。",
    },
    Blessing {
        name: "Maria Rodriguez",
        location: "Madrid, Spain",
        language: "es",
        message: "¡Felicidades! May your marriage be filled with joy, laughter, and endless love.",
    },
];

pub struct RegistryItem {
    pub name: &'static str,
    pub price: &'static str,
}

pub struct RegistryCategory {
    pub name: &'static str,
    pub items: &'static [RegistryItem],
}

pub const REGISTRY: &[RegistryCategory] = &[
    RegistryCategory {
        name: "Traditional Gifts",
        items: &[
            RegistryItem { name: "Silver Pooja Thali Set", price: "$150" },
            RegistryItem { name: "Brass Diya Collection", price: "$45" },
            RegistryItem { name: "Handwoven Silk Sarees", price: "$200" },
            RegistryItem { name: "Copper Water Vessels", price: "$75" },
        ],
    },
    RegistryCategory {
        name: "Home & Kitchen",
        items: &[
            RegistryItem { name: "Pressure Cooker Set", price: "$120" },
            RegistryItem { name: "Spice Box Collection", price: "$65" },
            RegistryItem { name: "Dinner Set", price: "$180" },
            RegistryItem { name: "Tea Set", price: "$85" },
        ],
    },
    RegistryCategory {
        name: "Modern Lifestyle",
        items: &[
            RegistryItem { name: "Smart Home System", price: "$500" },
            RegistryItem { name: "Air Purifier", price: "$250" },
            RegistryItem { name: "Fitness Equipment", price: "$400" },
            RegistryItem { name: "Travel Luggage Set", price: "$300" },
        ],
    },
];

/// Sample figures for the admin dashboard.
pub struct DashboardStats {
    pub total_rsvps: u32,
    pub confirmed_guests: u32,
    pub messages: u32,
    pub registry_items: u32,
}

pub const DASHBOARD_STATS: DashboardStats = DashboardStats {
    total_rsvps: 147,
    confirmed_guests: 112,
    messages: 23,
    registry_items: 8,
};

pub struct Activity {
    pub description: &'static str,
    pub when: &'static str,
}

pub const RECENT_ACTIVITY: &[Activity] = &[
    Activity {
        description: "Sarah Johnson confirmed attendance",
        when: "2 hours ago",
    },
    Activity {
        description: "New blessing from राज शर्मा",
        when: "4 hours ago",
    },
    Activity {
        description: "Silver Pooja Thali Set was gifted",
        when: "6 hours ago",
    },
    Activity {
        description: "Maria Rodriguez updated guest count",
        when: "1 day ago",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_covers_four_days() {
        assert_eq!(TIMELINE.len(), 4);
        assert_eq!(TIMELINE.iter().map(|day| day.events.len()).sum::<usize>(), 10);
    }

    #[test]
    fn test_every_ceremony_is_in_the_rsvp_list() {
        for ceremony in CEREMONIES {
            assert!(
                RSVP_EVENTS.iter().any(|event| event.name == ceremony.name),
                "{}",
                ceremony.name
            );
        }
    }
}
