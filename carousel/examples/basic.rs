use carousel::{Carousel, CarouselOptions, Size};

fn main() {
    let options = CarouselOptions::new(vec!["one", "two", "three", "four"], Size::new(320.0, 200.0))
        .with_item(Size::new(240.0, 180.0))
        .with_on_scroll_end(Some(|item: &&str, index: usize| {
            println!("settled on {item} (#{index})");
        }));
    let mut c = Carousel::new(options);

    for item in c.items() {
        println!(
            "key={} offset={} margin={:?} ramp={:?}",
            item.key,
            item.layout.offset,
            item.margin,
            item.animation.opacity.input()
        );
    }

    c.scroll_to_index(2);
    if let Some(cmd) = c.take_scroll_command() {
        println!("host scrolls to {}", cmd.offset);
        c.on_scroll(cmd.offset);
    }
    println!("style of #2: {:?}", c.item_visual_style(2));
}
