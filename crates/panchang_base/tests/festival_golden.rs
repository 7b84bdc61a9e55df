//! Built-in festival table checks.

use panchang_base::{FestivalQuery, FestivalTable, Masa, Tithi};

fn ids(table: &FestivalTable, q: &FestivalQuery) -> Vec<String> {
    table
        .festivals_matching(q)
        .unwrap()
        .into_iter()
        .map(|r| r.id.clone())
        .collect()
}

fn query(tithi: Tithi, masa: Masa, nakshatra: u8) -> FestivalQuery {
    FestivalQuery {
        tithi: tithi.index(),
        masa: masa.index(),
        nakshatra,
        leap_month: false,
        kshaya_tithi: None,
    }
}

#[test]
fn ugadi_on_chaitra_pratipada() {
    let table = FestivalTable::builtin().unwrap();
    let hits = ids(&table, &query(Tithi::ShuklaPratipada, Masa::Chaitra, 1));
    assert_eq!(hits, ["ugadi"]);
}

#[test]
fn named_purnima_outranks_generic() {
    let table = FestivalTable::builtin().unwrap();
    let hits = ids(&table, &query(Tithi::Purnima, Masa::Phalguna, 11));
    assert_eq!(hits, ["holi", "purnima"]);
}

#[test]
fn janmashtami_in_amanta_shravana() {
    let table = FestivalTable::builtin().unwrap();
    let hits = ids(&table, &query(Tithi::KrishnaAshtami, Masa::Shravana, 3));
    assert_eq!(hits, ["krishna-janmashtami"]);
    assert!(ids(&table, &query(Tithi::KrishnaAshtami, Masa::Bhadrapada, 3)).is_empty());
}

#[test]
fn maha_shivaratri_in_amanta_magha() {
    let table = FestivalTable::builtin().unwrap();
    let hits = ids(&table, &query(Tithi::KrishnaChaturdashi, Masa::Magha, 20));
    assert_eq!(hits, ["maha-shivaratri", "masa-shivaratri"]);
}

#[test]
fn nakshatra_festival_leads() {
    let table = FestivalTable::builtin().unwrap();
    // Margashira Purnima with the Moon in Ardra
    let hits = ids(&table, &query(Tithi::Purnima, Masa::Margashira, 5));
    assert_eq!(hits, ["arudra-darshanam", "purnima"]);
}

#[test]
fn adhika_month_only_matches_leap_rules() {
    let table = FestivalTable::builtin().unwrap();
    let mut q = query(Tithi::Purnima, Masa::Shravana, 22);
    q.leap_month = true;
    assert_eq!(ids(&table, &q), ["adhika-purnima"]);
}

#[test]
fn kshaya_ekadashi_still_reported() {
    let table = FestivalTable::builtin().unwrap();
    let mut q = query(Tithi::ShuklaDashami, Masa::Pausha, 1);
    assert!(ids(&table, &q).is_empty());
    q.kshaya_tithi = Some(Tithi::ShuklaEkadashi.index());
    assert_eq!(ids(&table, &q), ["shukla-ekadashi"]);
}

#[test]
fn every_builtin_rule_has_a_name() {
    let table = FestivalTable::builtin().unwrap();
    for rule in table.rules() {
        assert!(!rule.name().is_empty(), "{}", rule.id);
    }
}
