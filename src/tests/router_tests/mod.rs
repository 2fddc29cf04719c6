mod city_tests;
mod dashboard_tests;
