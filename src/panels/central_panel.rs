use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            app.fit_canvas(canvas_rect.width() as u32, canvas_rect.height() as u32);

            // Handle input
            let events = app.input_handler_mut().process_input(ctx, &response);
            for event in events {
                app.handle_canvas_event(event);
            }

            // Render the canvas
            app.render_canvas(ctx, &painter, canvas_rect);
        });
}
