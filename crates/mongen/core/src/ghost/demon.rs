//! The ghost/demon attribute profile and its synthesis routines.

use crate::env::RngStream;
use crate::ghost::ghost_level_to_rank;
use crate::ghost::spells::{add_spells, random_demon_spells};
use crate::spells::SpellBook;
use crate::template::Resists;

/// Melee attack type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AttackType {
    #[default]
    Hit,
    Bite,
    Sting,
    Claw,
    Punch,
}

/// Elemental flavour riding on a melee attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AttackFlavour {
    #[default]
    Plain,
    Fire,
    Cold,
    Elec,
    Poison,
    Acid,
    Drain,
}

/// Weapon brand carried by ghosts and animated weapons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Brand {
    #[default]
    None,
    Flaming,
    Freezing,
    Electrocution,
    Venom,
    Draining,
    Speed,
    Vorpal,
    Distortion,
}

/// Flight capability tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum FlightTier {
    #[default]
    None,
    Winged,
    Levitate,
}

/// Display colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Colour {
    #[default]
    Black,
    Red,
    Green,
    Brown,
    Cyan,
    Purple,
    White,
    LightRed,
    LightGreen,
    LightCyan,
    LightMagenta,
    Yellow,
    LightGrey,
}

impl Colour {
    /// Palette for freshly generated ugly things.
    pub const UGLY: [Colour; 6] = [
        Colour::Red,
        Colour::Brown,
        Colour::Green,
        Colour::Cyan,
        Colour::Purple,
        Colour::White,
    ];

    /// The brighter very-ugly counterpart of an ugly colour.
    pub fn brighten(self) -> Colour {
        match self {
            Colour::Red => Colour::LightRed,
            Colour::Green => Colour::LightGreen,
            Colour::Cyan => Colour::LightCyan,
            Colour::Purple => Colour::LightMagenta,
            Colour::Brown => Colour::Yellow,
            Colour::White => Colour::LightGrey,
            other => other,
        }
    }
}

/// Skill whose mastery shaped the player the ghost replicates.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Skill {
    #[default]
    Fighting,
    ShortBlades,
    LongBlades,
    Axes,
    MacesFlails,
    Polearms,
    UnarmedCombat,
    Bows,
    Throwing,
    Conjurations,
    Necromancy,
    Summonings,
    FireMagic,
    IceMagic,
    AirMagic,
    EarthMagic,
    PoisonMagic,
}

impl Skill {
    /// Weapon skills push the ghost's melee damage; everything else only
    /// contributes a fraction.
    pub const fn is_weapon_skill(self) -> bool {
        matches!(
            self,
            Skill::Fighting
                | Skill::ShortBlades
                | Skill::LongBlades
                | Skill::Axes
                | Skill::MacesFlails
                | Skill::Polearms
                | Skill::UnarmedCombat
        )
    }
}

/// Everything the synthesizer needs to replicate a dead player.
///
/// Species/job/religion are display strings supplied by the caller; only
/// the best skill participates in stat derivation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSnapshot {
    pub name: String,
    pub species: String,
    pub job: String,
    pub religion: String,
    pub best_skill: Skill,
    pub best_skill_level: i32,
    pub xl: i32,
    pub max_hp: i32,
    pub ac: i32,
    pub ev: i32,
    pub speed: i32,
    pub see_invis: bool,
    pub brand: Brand,
    pub resists: Resists,
    pub fly: FlightTier,
    pub spells: Vec<crate::spells::SpellId>,
}

/// Stats of the weapon an animation spell brings to life.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponProfile {
    pub name: String,
    pub base_damage: i32,
    /// Attack delay relative to the speed-10 baseline; negative is faster.
    pub delay: i32,
    pub brand: Brand,
}

/// Full attribute set for a ghost, demon, ugly thing, or animated weapon.
///
/// Constructed fresh per instantiation request and fully populated by one
/// `init_*` call; never partially valid outside synthesis.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GhostDemon {
    pub name: String,
    pub species: String,
    pub job: String,
    pub religion: String,
    pub best_skill: Skill,
    pub best_skill_level: i32,
    pub xl: i32,

    pub max_hp: i32,
    pub ev: i32,
    pub ac: i32,
    pub damage: i32,
    pub speed: i32,
    pub see_invis: bool,
    pub brand: Brand,
    pub att_type: AttackType,
    pub att_flav: AttackFlavour,
    pub resists: Resists,

    pub spellcaster: bool,
    pub cycle_colours: bool,
    pub colour: Colour,
    pub fly: FlightTier,

    pub spells: SpellBook,
}

impl GhostDemon {
    /// Caps keeping imported player stats inside monster bounds.
    const MAX_GHOST_HP: i32 = 400;
    const MAX_GHOST_EV: i32 = 60;

    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every field back to the empty profile.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_spells(&self) -> bool {
        !self.spells.is_empty()
    }

    /// Replicate a dead player as a ghost.
    ///
    /// Combat stats derive from the best skill: weapon mastery feeds melee
    /// damage at full weight, other skills at half. Player spells are
    /// translated to monster-castable analogues; untranslatable ones drop.
    pub fn init_player_ghost(&mut self, player: &PlayerSnapshot) {
        self.reset();
        self.name = player.name.clone();
        self.species = player.species.clone();
        self.job = player.job.clone();
        self.religion = player.religion.clone();
        self.best_skill = player.best_skill;
        self.best_skill_level = player.best_skill_level;
        self.xl = player.xl;

        self.max_hp = player.max_hp.clamp(1, Self::MAX_GHOST_HP);
        self.ev = player.ev.min(Self::MAX_GHOST_EV);
        self.ac = player.ac.max(0);
        self.speed = player.speed.clamp(6, 13);
        self.see_invis = player.see_invis;
        self.brand = player.brand;
        self.resists = player.resists;
        self.fly = player.fly;
        self.att_type = AttackType::Hit;
        self.att_flav = AttackFlavour::Plain;
        self.colour = Colour::White;

        let skill_bonus = if player.best_skill.is_weapon_skill() {
            player.best_skill_level * 3 / 2
        } else {
            player.best_skill_level / 2
        };
        self.damage = 4 + player.xl / 2 + skill_bonus;

        add_spells(self, &player.spells);
    }

    /// Roll a random Pandemonium demon.
    ///
    /// Everything comes off rank-scaled uniform draws; the draw order below
    /// is part of the determinism contract.
    pub fn init_random_demon(&mut self, stream: &mut RngStream<'_>) {
        self.reset();
        self.name = String::from("pandemonium lord");
        self.xl = stream.range(17, 27);
        let rank = ghost_level_to_rank(self.xl);

        self.max_hp = 100 + stream.roll_dice(3, 50);
        self.ac = rank + stream.range(0, 8);
        self.ev = rank + stream.range(2, 10);
        self.damage = 20 + stream.range(0, 10) + rank * 2;
        self.speed = stream.range(8, 14);
        self.see_invis = !stream.one_chance_in(10);

        if stream.one_chance_in(3) {
            self.resists |= Resists::FIRE;
        }
        if stream.one_chance_in(3) {
            self.resists |= Resists::COLD;
        }
        if stream.one_chance_in(4) {
            self.resists |= Resists::ELEC;
        }
        if stream.one_chance_in(4) {
            self.resists |= Resists::POISON;
        }
        if stream.one_chance_in(5) {
            self.resists |= Resists::NEGATIVE;
        }

        self.att_type = match stream.below(4) {
            0 => AttackType::Bite,
            1 => AttackType::Claw,
            2 => AttackType::Punch,
            _ => AttackType::Hit,
        };
        self.att_flav = AttackFlavour::Plain;

        self.brand = if stream.one_chance_in(3) {
            Brand::None
        } else {
            match stream.below(6) {
                0 => Brand::Flaming,
                1 => Brand::Freezing,
                2 => Brand::Electrocution,
                3 => Brand::Venom,
                4 => Brand::Draining,
                _ => Brand::Vorpal,
            }
        };

        self.colour = match stream.below(6) {
            0 => Colour::Red,
            1 => Colour::Green,
            2 => Colour::Cyan,
            3 => Colour::Purple,
            4 => Colour::Yellow,
            _ => Colour::LightGrey,
        };
        self.cycle_colours = stream.one_chance_in(10);
        self.fly = if stream.one_chance_in(3) {
            FlightTier::None
        } else {
            FlightTier::Winged
        };

        self.spellcaster = !stream.one_chance_in(3);
        if self.spellcaster {
            self.spells = random_demon_spells(stream);
        }
    }

    /// Initialize an ugly thing, or mutate one in place.
    ///
    /// With `only_mutate` the stat block, attack shape and resists are left
    /// alone and only the colour/flavour pairing rerolls, always onto a new
    /// flavour. The upgrade path uses this to change a single attribute per
    /// step.
    pub fn init_ugly_thing(
        &mut self,
        stream: &mut RngStream<'_>,
        very_ugly: bool,
        only_mutate: bool,
        force_colour: Option<Colour>,
    ) {
        if !only_mutate {
            self.reset();
            self.name = String::from(if very_ugly { "very ugly thing" } else { "ugly thing" });
            self.xl = if very_ugly { 12 } else { 8 };
            self.max_hp = self.xl * stream.range(4, 6);
            self.ac = if very_ugly { 4 } else { 3 };
            self.ev = 7;
            self.damage = if very_ugly { 17 } else { 12 };
            self.speed = stream.range(10, 12);
            self.fly = FlightTier::None;
            self.att_type = match stream.below(3) {
                0 => AttackType::Bite,
                1 => AttackType::Sting,
                _ => AttackType::Claw,
            };
        }

        let base = force_colour.unwrap_or_else(|| {
            let mut pick = Colour::UGLY[stream.below(Colour::UGLY.len() as u32) as usize];
            // A mutation must land on a new pairing.
            while only_mutate && ugly_colour_flavour(pick) == self.att_flav {
                pick = Colour::UGLY[stream.below(Colour::UGLY.len() as u32) as usize];
            }
            pick
        });
        self.colour = if very_ugly { base.brighten() } else { base };
        self.att_flav = ugly_colour_flavour(base);

        if very_ugly && !only_mutate {
            self.ugly_thing_add_resistance(true, self.att_flav);
        }
    }

    /// Upgrade an ugly thing to a very ugly thing.
    ///
    /// Stats scale up, then exactly one attribute mutates: the
    /// colour/flavour pairing, the attack shape, or an added resistance.
    pub fn ugly_thing_to_very_ugly_thing(&mut self, stream: &mut RngStream<'_>) {
        let old_flav = self.att_flav;

        self.name = String::from("very ugly thing");
        self.xl = 12;
        self.max_hp += self.max_hp / 2;
        self.ac += 1;
        self.damage += 5;

        match stream.below(3) {
            0 => {
                // New colour, flavour follows it.
                self.init_ugly_thing(stream, true, true, None);
            }
            1 => {
                // New attack shape, never the one it already has.
                let prev = self.att_type;
                while self.att_type == prev {
                    self.att_type = match stream.below(3) {
                        0 => AttackType::Bite,
                        1 => AttackType::Sting,
                        _ => AttackType::Claw,
                    };
                }
                self.colour = self.colour.brighten();
            }
            _ => {
                self.colour = self.colour.brighten();
                self.ugly_thing_add_resistance(true, old_flav);
            }
        }
    }

    /// Grant the resistance matching an ugly thing's attack flavour.
    pub fn ugly_thing_add_resistance(&mut self, very_ugly: bool, flavour: AttackFlavour) {
        let resist = match flavour {
            AttackFlavour::Fire => Resists::FIRE,
            AttackFlavour::Cold => Resists::COLD,
            AttackFlavour::Elec => Resists::ELEC,
            AttackFlavour::Poison => Resists::POISON,
            AttackFlavour::Acid => Resists::ACID,
            AttackFlavour::Drain => Resists::NEGATIVE,
            AttackFlavour::Plain => return,
        };
        self.resists |= resist;
        if very_ugly && flavour == AttackFlavour::Fire {
            self.resists |= Resists::STICKY_FLAME;
        }
    }

    /// Animate a weapon as a dancing weapon.
    pub fn init_dancing_weapon(&mut self, weapon: &WeaponProfile, power: i32) {
        self.reset();
        let power = power.clamp(0, 100);
        self.name = weapon.name.clone();
        self.xl = (power / 4).clamp(1, 27);
        self.max_hp = 10 + power / 3;
        self.ac = 5 + power / 10;
        self.ev = 15 + power / 20;
        self.damage = weapon.base_damage;
        self.speed = (10 - weapon.delay).clamp(5, 20);
        self.brand = weapon.brand;
        self.fly = FlightTier::Levitate;
        self.resists = Resists::POISON | Resists::NEGATIVE;
        self.colour = Colour::LightGrey;
    }

    /// Animate a weapon as a spectral copy fighting beside its owner.
    ///
    /// Tracks the owner's weapon skill rather than raw power.
    pub fn init_spectral_weapon(&mut self, weapon: &WeaponProfile, power: i32, wpn_skill: i32) {
        self.reset();
        let power = power.clamp(0, 100);
        self.name = weapon.name.clone();
        self.xl = (wpn_skill / 2).clamp(1, 27);
        self.max_hp = 10 + power / 3;
        self.ac = 3 + power / 8;
        self.ev = 10 + wpn_skill / 3;
        self.damage = weapon.base_damage + wpn_skill / 4;
        self.speed = (10 - weapon.delay).clamp(5, 20);
        self.brand = weapon.brand;
        self.fly = FlightTier::Levitate;
        self.see_invis = true;
        self.resists = Resists::POISON | Resists::NEGATIVE;
        self.colour = Colour::Cyan;
    }
}

/// Flavour carried by each ugly colour.
fn ugly_colour_flavour(colour: Colour) -> AttackFlavour {
    match colour {
        Colour::Red => AttackFlavour::Fire,
        Colour::Brown => AttackFlavour::Acid,
        Colour::Green => AttackFlavour::Poison,
        Colour::Cyan => AttackFlavour::Elec,
        Colour::Purple => AttackFlavour::Drain,
        Colour::White => AttackFlavour::Cold,
        _ => AttackFlavour::Plain,
    }
}
