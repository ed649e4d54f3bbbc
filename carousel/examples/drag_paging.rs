// Example: feeding drag events and reading the paging decision.
use carousel::{Carousel, CarouselOptions, Size};

fn main() {
    let options = CarouselOptions::new((0..6).collect::<Vec<u32>>(), Size::new(400.0, 300.0))
        .with_item(Size::new(300.0, 300.0))
        .with_min_scroll_distance(8.0)
        .with_on_scroll_end_drag(Some(|target: isize| println!("drag wants #{target}")));
    let mut c = Carousel::new(options);

    for (from, to) in [(0.0, 3.0), (0.0, 60.0), (250.0, 120.0), (10.0, -40.0)] {
        c.on_scroll(from);
        c.on_scroll_begin_drag();
        c.on_scroll(to);
        let outcome = c.on_scroll_end_drag();
        let offset = c.take_scroll_command().map(|cmd| cmd.offset);
        println!(
            "{from} -> {to}: {outcome:?}, current={}, scroll to {offset:?}",
            c.current_index()
        );
    }
}
