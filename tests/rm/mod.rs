mod remove_tracked_file_stages_its_removal;
mod remove_a_path_outside_the_repository_fails;
mod remove_directory_removes_tracked_files;
