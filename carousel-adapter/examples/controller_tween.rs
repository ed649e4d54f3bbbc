use carousel::{CarouselOptions, Size};
use carousel_adapter::{Controller, Easing};

fn main() {
    // Example: a controller driving the snap animation without holding any UI objects.
    //
    // An adapter would:
    // - forward scroll and drag events
    // - call tick(now_ms) in a frame loop / timer
    // - apply the returned offset to the real scroll container (if any)
    // - render items with the styles for the current offset
    let options = CarouselOptions::new((0..10).collect::<Vec<u32>>(), Size::new(360.0, 640.0));
    let mut c = Controller::new(options)
        .with_duration_ms(240)
        .with_easing(Easing::SmoothStep);

    c.on_scroll_begin_drag();
    c.on_scroll(40.0);
    println!("drag: {:?}", c.on_scroll_end_drag());

    let mut now_ms = 0u64;
    while let Some(off) = c.tick(now_ms) {
        if now_ms % 80 == 0 {
            let styles = c.item_styles();
            println!("t={now_ms} off={off:.1} neighbours={:?}", &styles[..3]);
        }
        now_ms += 16;
    }

    println!(
        "done: index={} off={}",
        c.current_index(),
        c.carousel().scroll_position()
    );
}
