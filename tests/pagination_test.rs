use lumen::components::{PageItem, PaginationEvent, Paginator};

fn pages(paginator: &Paginator) -> Vec<PageItem> {
    paginator.visible_pages()
}

fn page(n: usize) -> PageItem {
    PageItem::Page(n)
}

#[test]
fn test_total_pages() {
    let mut paginator = Paginator::new(10);
    assert_eq!(paginator.total_pages(), 1, "empty data still has one page");

    paginator.set_total_items(10);
    assert_eq!(paginator.total_pages(), 1);

    paginator.set_total_items(11);
    assert_eq!(paginator.total_pages(), 2);

    paginator.set_total_items(95);
    assert_eq!(paginator.total_pages(), 10);
}

#[test]
fn test_seven_or_fewer_pages_render_in_full() {
    let mut paginator = Paginator::new(10);
    paginator.set_total_items(70);

    assert_eq!(
        pages(&paginator),
        (1..=7).map(page).collect::<Vec<_>>(),
        "seven pages show without ellipses"
    );
}

#[test]
fn test_windowing_near_the_start() {
    let mut paginator = Paginator::new(10);
    paginator.set_total_items(200); // 20 pages

    // current = 1: no leading ellipsis
    assert_eq!(
        pages(&paginator),
        vec![page(1), page(2), PageItem::Ellipsis, page(20)]
    );
}

#[test]
fn test_windowing_in_the_middle() {
    let mut paginator = Paginator::new(10);
    paginator.set_total_items(200);
    paginator.go_to(10).unwrap();

    assert_eq!(
        pages(&paginator),
        vec![
            page(1),
            PageItem::Ellipsis,
            page(9),
            page(10),
            page(11),
            PageItem::Ellipsis,
            page(20),
        ]
    );
}

#[test]
fn test_windowing_near_the_end() {
    let mut paginator = Paginator::new(10);
    paginator.set_total_items(200);
    paginator.go_to(20).unwrap();

    assert_eq!(
        pages(&paginator),
        vec![page(1), PageItem::Ellipsis, page(19), page(20)]
    );
}

#[test]
fn test_go_to_out_of_range_is_noop() {
    let mut paginator = Paginator::new(10);
    paginator.set_total_items(30);

    assert_eq!(paginator.go_to(0), None);
    assert_eq!(paginator.go_to(4), None);
    assert_eq!(paginator.current_page(), 1);

    // Same-page requests are no-ops too
    assert_eq!(paginator.go_to(1), None);

    assert_eq!(paginator.go_to(3), Some(PaginationEvent::PageChanged(3)));
    assert_eq!(paginator.next(), None, "already on the last page");
    assert_eq!(paginator.previous(), Some(PaginationEvent::PageChanged(2)));
}

#[test]
fn test_shrinking_data_clamps_current_page() {
    let mut paginator = Paginator::new(10);
    paginator.set_total_items(100);
    paginator.go_to(10).unwrap();

    paginator.set_total_items(25);
    assert_eq!(paginator.current_page(), 3);
}

#[test]
fn test_page_range() {
    let mut paginator = Paginator::new(5);
    paginator.set_total_items(12);

    assert_eq!(paginator.page_range(), 0..5);
    paginator.go_to(3).unwrap();
    assert_eq!(paginator.page_range(), 10..12, "last page is partial");
}
