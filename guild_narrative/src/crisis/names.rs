//! Flavor text for crises, one table per crisis category.
//!
//! Descriptions carry a `{seal}` placeholder for the threatened seal's name.

use guild_state::CrisisType;

/// Candidate names and descriptions for one crisis category.
#[derive(Debug)]
pub struct NameTable {
    pub names: [&'static str; 5],
    pub descriptions: [&'static str; 5],
}

/// Placeholder replaced by the target seal's name.
pub const SEAL_PLACEHOLDER: &str = "{seal}";

static DEMON_INCURSION: NameTable = NameTable {
    names: [
        "The Burning Breach",
        "Hellgate Tremors",
        "The Crimson Host",
        "Shadowfiend Raid",
        "The Abyssal Tide",
    ],
    descriptions: [
        "A rift has torn open near {seal} and demons pour through.",
        "Fiendish shapes circle {seal}, testing its wards.",
        "A demon lord's vanguard marches on {seal}.",
        "Imps swarm the approaches to {seal}, gnawing at the runes.",
        "The ground around {seal} cracks and smoulders with hellfire.",
    ],
};

static CULTIST_RITUAL: NameTable = NameTable {
    names: [
        "The Black Vigil",
        "Chant of Unbinding",
        "The Ashen Circle",
        "Blood Moon Rite",
        "The Whispering Conclave",
    ],
    descriptions: [
        "Hooded cultists gather by {seal}, chanting to weaken it.",
        "A ring of candles burns around {seal} as the cult begins its rite.",
        "Cultists have smuggled a cursed idol into the shrine of {seal}.",
        "Sacrificial marks appear on the stones of {seal}.",
        "A cult prophet preaches the fall of {seal} to a growing crowd.",
    ],
};

static MONSTER_HORDE: NameTable = NameTable {
    names: [
        "The Howling Swarm",
        "Ironhide Stampede",
        "The Ravening Pack",
        "Gravecrawler Surge",
        "The Thousand Claws",
    ],
    descriptions: [
        "A horde of beasts is stampeding toward {seal}.",
        "Packs of ghouls have been sighted on the roads to {seal}.",
        "Trolls from the hills lay siege to the watchtowers of {seal}.",
        "Giant spiders have spun webs across the gates of {seal}.",
        "Wyverns circle overhead, diving at the guardians of {seal}.",
    ],
};

static SABOTAGE: NameTable = NameTable {
    names: [
        "The Silent Knife",
        "Broken Wards",
        "The Turncoat's Gambit",
        "Poisoned Wells",
        "The Cracked Keystone",
    ],
    descriptions: [
        "Someone has been chipping runes off {seal} in the night.",
        "A trusted warden of {seal} has vanished with the ward keys.",
        "Forged orders have pulled the guards away from {seal}.",
        "The supply lines to {seal} have been cut by unknown hands.",
        "A hidden charge has been planted beneath {seal}.",
    ],
};

static NATURAL_DISASTER: NameTable = NameTable {
    names: [
        "The Great Quake",
        "Stormfall",
        "The Rising Flood",
        "Wildfire Season",
        "The Endless Blizzard",
    ],
    descriptions: [
        "Earthquakes shake the foundations of {seal}.",
        "A relentless storm batters {seal} with lightning.",
        "Floodwaters are rising around {seal}.",
        "Wildfire sweeps through the forests surrounding {seal}.",
        "A blizzard buries {seal} under ice and snow.",
    ],
};

static CORRUPTION: NameTable = NameTable {
    names: [
        "The Creeping Rot",
        "Blightbloom",
        "The Hollowing",
        "Veinrot Plague",
        "The Withering",
    ],
    descriptions: [
        "A creeping blight spreads from the stones of {seal}.",
        "Black veins crawl across the surface of {seal}.",
        "The wardens of {seal} fall ill with a wasting sickness.",
        "Strange flowers bloom around {seal}, draining its power.",
        "The light of {seal} dims as corruption seeps in.",
    ],
};

/// Look up the flavor table for a crisis category.
pub fn name_table(crisis_type: CrisisType) -> &'static NameTable {
    match crisis_type {
        CrisisType::DemonIncursion => &DEMON_INCURSION,
        CrisisType::CultistRitual => &CULTIST_RITUAL,
        CrisisType::MonsterHorde => &MONSTER_HORDE,
        CrisisType::Sabotage => &SABOTAGE,
        CrisisType::NaturalDisaster => &NATURAL_DISASTER,
        CrisisType::Corruption => &CORRUPTION,
    }
}

/// Fill in a description template with the seal's name.
pub fn render_description(template: &str, seal_name: &str) -> String {
    template.replace(SEAL_PLACEHOLDER, seal_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_description_names_the_seal() {
        for crisis_type in CrisisType::ALL {
            for template in name_table(crisis_type).descriptions {
                assert!(template.contains(SEAL_PLACEHOLDER), "{crisis_type}: {template}");
            }
        }
    }

    #[test]
    fn test_names_are_unique_across_tables() {
        let mut seen = HashSet::new();
        for crisis_type in CrisisType::ALL {
            for name in name_table(crisis_type).names {
                assert!(seen.insert(name), "duplicate crisis name {name}");
            }
        }
        assert_eq!(seen.len(), 30);
    }

    #[test]
    fn test_render_description() {
        let text = render_description("Floodwaters are rising around {seal}.", "the Tidestone");
        assert_eq!(text, "Floodwaters are rising around the Tidestone.");
    }
}
