use super::*;

#[test]
fn first_page_has_next_but_no_previous() {
    let page = PageResult::paginate((0..50).collect::<Vec<_>>(), 20, 0);
    assert_eq!(page.count, 50);
    assert_eq!(page.results.len(), 20);
    assert_eq!(page.next.as_deref(), Some("20"));
    assert_eq!(page.previous, None);
}

#[test]
fn last_page_is_short_and_has_no_next() {
    let page = PageResult::paginate((0..50).collect::<Vec<_>>(), 20, 40);
    assert_eq!(page.results, (40..50).collect::<Vec<_>>());
    assert_eq!(page.next, None);
    assert_eq!(page.previous.as_deref(), Some("20"));
}

#[test]
fn exact_boundary_has_no_next() {
    let page = PageResult::paginate((0..40).collect::<Vec<_>>(), 20, 20);
    assert_eq!(page.results.len(), 20);
    assert_eq!(page.next, None);
}

#[test]
fn previous_clamps_to_zero() {
    let page = PageResult::paginate((0..50).collect::<Vec<_>>(), 20, 5);
    assert_eq!(page.previous.as_deref(), Some("0"));
}

#[test]
fn offset_past_end_yields_empty_results() {
    let page = PageResult::paginate((0..10).collect::<Vec<_>>(), 20, 100);
    assert!(page.results.is_empty());
    assert_eq!(page.count, 10);
    assert_eq!(page.next, None);
    assert_eq!(page.previous.as_deref(), Some("80"));
}

#[test]
fn following_next_walks_the_whole_list_without_gaps() {
    let all: Vec<u32> = (0..47).collect();
    let mut seen = Vec::new();
    let mut offset = 0;
    loop {
        let page = PageResult::paginate(all.clone(), 10, offset);
        seen.extend(page.results.iter().copied());
        match page.next_offset() {
            Some(next) => offset = next,
            None => break,
        }
    }
    assert_eq!(seen, all);
}

#[test]
fn empty_page_has_no_tokens() {
    let page: PageResult<u32> = PageResult::paginate(Vec::new(), 20, 0);
    assert_eq!(page.count, 0);
    assert_eq!(page.next, None);
    assert_eq!(page.previous, None);
    assert!(page.results.is_empty());
}

#[test]
fn parse_token_accepts_both_forms() {
    assert_eq!(parse_token("40"), Some(40));
    assert_eq!(parse_token("offset=40"), Some(40));
    assert_eq!(parse_token(" 7 "), Some(7));
    assert_eq!(parse_token("forty"), None);
}

#[test]
fn display_range_is_one_based() {
    let page = PageResult::paginate((0..50).collect::<Vec<_>>(), 20, 40);
    assert_eq!(page.display_range(40), Some((41, 50)));
    let empty: PageResult<u32> = PageResult::paginate(Vec::new(), 20, 0);
    assert_eq!(empty.display_range(0), None);
}
