mod common;

use common::{controller, drain, keys, settle, Call, ScriptedCatalog, DEBOUNCE};
use pokedex_explorer::Mode;
use std::collections::HashSet;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn browsing_accumulates_pages_without_duplicates() {
    let catalog = ScriptedCatalog::generated(45, &[]);
    let (mut controller, mut completions, _clock) = controller(&catalog, 20);

    controller.start().unwrap();
    drain(&mut controller, &mut completions).await;
    assert_eq!(controller.snapshot().items.len(), 20);
    assert!(controller.snapshot().has_more);

    assert!(controller.on_tail_visible(true).unwrap());
    drain(&mut controller, &mut completions).await;
    assert_eq!(controller.snapshot().items.len(), 40);

    assert!(controller.on_tail_visible(true).unwrap());
    drain(&mut controller, &mut completions).await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.items.len(), 45);
    assert!(!snapshot.has_more);
    assert!(!snapshot.is_loading);
    assert_eq!(snapshot.items[0].key, "mon-001");
    assert_eq!(snapshot.items[44].key, "mon-045");

    let offsets: Vec<usize> = catalog
        .page_calls()
        .iter()
        .map(|call| match call {
            Call::Page { offset, .. } => *offset,
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(offsets, vec![0, 20, 40]);
}

#[tokio::test(start_paused = true)]
async fn overlapping_pages_keep_one_row_per_key() {
    let mut names: Vec<String> = (1..=5).map(|i| format!("mon-{i}")).collect();
    names.insert(3, "mon-3".to_string());
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let catalog = ScriptedCatalog::new(&names);
    let (mut controller, mut completions, _clock) = controller(&catalog, 3);

    controller.start().unwrap();
    drain(&mut controller, &mut completions).await;
    controller.on_tail_visible(true).unwrap();
    drain(&mut controller, &mut completions).await;

    let keys = keys(&controller);
    let unique: HashSet<&String> = keys.iter().collect();
    assert_eq!(keys, vec!["mon-1", "mon-2", "mon-3", "mon-4", "mon-5"]);
    assert_eq!(unique.len(), keys.len());
}

#[tokio::test(start_paused = true)]
async fn exhausted_list_issues_no_fetch() {
    let catalog = ScriptedCatalog::generated(8, &[]);
    let (mut controller, mut completions, _clock) = controller(&catalog, 10);

    controller.start().unwrap();
    drain(&mut controller, &mut completions).await;
    assert!(!controller.snapshot().has_more);

    assert!(!controller.on_tail_visible(true).unwrap());
    assert!(!controller.on_tail_visible(false).unwrap());
    assert!(!controller.on_tail_visible(true).unwrap());
    drain(&mut controller, &mut completions).await;

    assert_eq!(catalog.page_calls().len(), 1);
    assert_eq!(controller.snapshot().items.len(), 8);
}

#[tokio::test(start_paused = true)]
async fn rapid_typing_settles_into_one_lookup() {
    let catalog = ScriptedCatalog::generated(20, &["pikachu"]);
    let (mut controller, mut completions, clock) = controller(&catalog, 20);

    controller.start().unwrap();
    drain(&mut controller, &mut completions).await;

    controller.set_search_term("pik");
    clock.advance(Duration::from_millis(100));
    assert!(!controller.tick().unwrap());

    controller.set_search_term("pika");
    clock.advance(Duration::from_millis(100));
    assert!(!controller.tick().unwrap());

    controller.set_search_term("pikachu");
    clock.advance(DEBOUNCE - Duration::from_millis(1));
    assert!(!controller.tick().unwrap());

    clock.advance(Duration::from_millis(1));
    assert!(controller.tick().unwrap());
    assert!(controller.next_deadline().is_none());
    drain(&mut controller, &mut completions).await;

    assert_eq!(catalog.key_calls("pik"), 0);
    assert_eq!(catalog.key_calls("pika"), 0);
    assert_eq!(catalog.key_calls("pikachu"), 1);

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.mode, Mode::Search);
    assert_eq!(keys(&controller), vec!["pikachu"]);
    assert!(!snapshot.has_more);
    assert!(snapshot.error_message.is_none());
}

#[tokio::test(start_paused = true)]
async fn category_change_discards_late_page() {
    let catalog = ScriptedCatalog::generated(30, &[])
        .with_category("fire", &["charmander", "charmeleon", "charizard"])
        .with_page_delay(None, Duration::from_millis(500))
        .with_page_delay(Some("fire"), Duration::from_millis(10));
    let (mut controller, mut completions, _clock) = controller(&catalog, 20);

    controller.start().unwrap();
    assert!(controller.set_category_filter(Some("fire".to_string())).unwrap());
    drain(&mut controller, &mut completions).await;

    assert_eq!(keys(&controller), vec!["charmander", "charmeleon", "charizard"]);
    assert!(!controller.snapshot().has_more);
    assert_eq!(controller.state().filter.selected(), Some("fire"));
    let pages = catalog.page_calls();
    assert_eq!(pages.len(), 2);
    assert!(pages.contains(&Call::Page {
        offset: 0,
        limit: 20,
        category: Some("fire".to_string()),
    }));
}

#[tokio::test(start_paused = true)]
async fn clearing_search_restores_browse() {
    let catalog = ScriptedCatalog::generated(25, &["ditto"]);
    let (mut controller, mut completions, clock) = controller(&catalog, 20);

    controller.start().unwrap();
    drain(&mut controller, &mut completions).await;
    let browse = keys(&controller);

    controller.set_search_term("ditto");
    assert!(settle(&mut controller, &clock));
    drain(&mut controller, &mut completions).await;
    assert_eq!(controller.snapshot().mode, Mode::Search);
    assert_eq!(keys(&controller), vec!["ditto"]);

    controller.set_search_term("");
    assert!(settle(&mut controller, &clock));
    drain(&mut controller, &mut completions).await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.mode, Mode::Browse);
    assert!(snapshot.has_more);
    assert_eq!(keys(&controller), browse);
    assert_eq!(catalog.page_calls().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn clearing_search_keeps_the_type_filter() {
    let catalog = ScriptedCatalog::generated(25, &["ditto"]).with_category("fire", &["charmander", "vulpix", "growlithe"]);
    let (mut controller, mut completions, clock) = controller(&catalog, 20);

    controller.start().unwrap();
    drain(&mut controller, &mut completions).await;
    controller.set_category_filter(Some("fire".to_string())).unwrap();
    drain(&mut controller, &mut completions).await;
    assert_eq!(keys(&controller), vec!["charmander", "vulpix", "growlithe"]);

    controller.set_search_term("ditto");
    assert!(settle(&mut controller, &clock));
    drain(&mut controller, &mut completions).await;
    assert_eq!(keys(&controller), vec!["ditto"]);

    controller.set_search_term("");
    assert!(settle(&mut controller, &clock));
    drain(&mut controller, &mut completions).await;

    assert_eq!(
        catalog.page_calls().last(),
        Some(&Call::Page {
            offset: 0,
            limit: 20,
            category: Some("fire".to_string()),
        })
    );
    assert_eq!(controller.snapshot().mode, Mode::Browse);
    assert_eq!(controller.state().list.category(), Some("fire"));
    assert_eq!(keys(&controller), vec!["charmander", "vulpix", "growlithe"]);
}

#[tokio::test(start_paused = true)]
async fn leaving_search_discards_late_lookup() {
    let catalog = ScriptedCatalog::generated(5, &["ditto"]).with_lookup_delay(Duration::from_millis(400));
    let (mut controller, mut completions, clock) = controller(&catalog, 20);

    controller.start().unwrap();
    drain(&mut controller, &mut completions).await;

    controller.set_search_term("ditto");
    assert!(settle(&mut controller, &clock));
    controller.set_search_term("");
    assert!(settle(&mut controller, &clock));
    drain(&mut controller, &mut completions).await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.mode, Mode::Browse);
    assert_eq!(snapshot.items.len(), 6);
}

#[tokio::test(start_paused = true)]
async fn unknown_term_is_a_quiet_empty_result() {
    let catalog = ScriptedCatalog::generated(10, &[]);
    let (mut controller, mut completions, clock) = controller(&catalog, 20);

    controller.start().unwrap();
    drain(&mut controller, &mut completions).await;

    controller.set_search_term("doesnotexist123");
    assert!(settle(&mut controller, &clock));
    assert!(controller.snapshot().is_loading);
    drain(&mut controller, &mut completions).await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.mode, Mode::Search);
    assert!(snapshot.items.is_empty());
    assert!(!snapshot.is_loading);
    assert!(snapshot.error_message.is_none());
    assert!(!snapshot.has_more);
}

#[tokio::test(start_paused = true)]
async fn tail_bursts_while_loading_issue_one_fetch() {
    let catalog = ScriptedCatalog::generated(60, &[]).with_page_delay(None, Duration::from_millis(200));
    let (mut controller, mut completions, _clock) = controller(&catalog, 20);

    controller.start().unwrap();
    drain(&mut controller, &mut completions).await;

    assert!(controller.on_tail_visible(true).unwrap());
    for _ in 0..5 {
        assert!(!controller.on_tail_visible(true).unwrap());
        assert!(!controller.on_tail_visible(false).unwrap());
    }
    assert!(controller.snapshot().is_loading);
    drain(&mut controller, &mut completions).await;

    assert_eq!(catalog.page_calls().len(), 2);
    assert_eq!(controller.snapshot().items.len(), 40);
}

#[tokio::test(start_paused = true)]
async fn failed_page_is_not_retried_until_tail_reappears() {
    let catalog = ScriptedCatalog::generated(40, &[]);
    let (mut controller, mut completions, _clock) = controller(&catalog, 20);

    controller.start().unwrap();
    drain(&mut controller, &mut completions).await;

    catalog.fail_pages(true);
    assert!(controller.on_tail_visible(true).unwrap());
    drain(&mut controller, &mut completions).await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.items.len(), 20);
    assert!(!snapshot.is_loading);
    assert!(snapshot.error_message.is_some());

    for _ in 0..3 {
        assert!(!controller.on_tail_visible(true).unwrap());
    }
    drain(&mut controller, &mut completions).await;
    assert_eq!(catalog.page_calls().len(), 2);

    catalog.fail_pages(false);
    assert!(!controller.on_tail_visible(false).unwrap());
    assert!(controller.on_tail_visible(true).unwrap());
    drain(&mut controller, &mut completions).await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.items.len(), 40);
    assert!(snapshot.error_message.is_none());
    assert_eq!(catalog.page_calls().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn shutdown_drops_pending_search() {
    let catalog = ScriptedCatalog::generated(5, &["mew"]);
    let (mut controller, mut completions, clock) = controller(&catalog, 20);

    controller.start().unwrap();
    drain(&mut controller, &mut completions).await;

    controller.set_search_term("mew");
    controller.shutdown();
    assert!(!settle(&mut controller, &clock));
    assert!(controller.next_deadline().is_none());
    assert_eq!(catalog.key_calls("mew"), 0);
    assert_eq!(controller.snapshot().mode, Mode::Browse);
}
